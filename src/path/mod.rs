//! Path module
//!
//! Canonicalizes path strings for the filesystem table: dot-segment and
//! empty-segment resolution, traversal-past-root detection, parent and
//! join helpers.

mod operations;

// Re-export public functions
pub use operations::{join, normalize, parent_of};
