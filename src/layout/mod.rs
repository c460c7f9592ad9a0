//! Layout module
//!
//! Declarative layout documents (disks, partitions, nested file tree)
//! and their JSON loading. Merging a document into the runtime table
//! lives in the filesystem module.

mod document;
mod loader;

// Re-export public types and functions
pub use document::{Disk, LayoutDocument, NodeSpec, Partition, ScenarioConfig};
pub use loader::load_layout;
