//! Content module
//!
//! Host-file backed content storage collaborator: given a stored content
//! reference, returns the line content from where it physically lives.

mod operations;

// Re-export public functions
pub use operations::{read_lines, resolve_content_path};
