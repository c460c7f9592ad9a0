//! Filesystem table module
//!
//! The runtime state of the synthetic filesystem: the flat path-indexed
//! entry table, its query and mutation surface, layout merging and size
//! propagation.

mod entry;
mod merge;
mod operations;
mod results;
mod table;

// Re-export public types
pub use entry::{Entry, FileType, FileUpdate, NewFile};
pub use results::{MergeOutcome, MountIssue};
pub use table::Filesystem;
