//! Content storage operations
//!
//! Resolves a logical entry's stored content reference to a host file and
//! reads it. The table itself only keeps the reference string; everything
//! physical happens here.

use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Compose the host location of a content reference: the configured
/// content root, the scenario subdirectory when one is set, then the
/// reference itself.
pub fn resolve_content_path(
    files_root: &Path,
    scenario: Option<&str>,
    real_filename: &str,
) -> PathBuf {
    match scenario {
        Some(name) => files_root.join(name).join(real_filename),
        None => files_root.join(real_filename),
    }
}

/// Read a content blob as lines. A missing or unreadable resource yields
/// `None`, never an error.
pub fn read_lines(path: &Path) -> Option<Vec<String>> {
    if !path.is_file() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(raw) => Some(raw.lines().map(str::to_string).collect()),
        Err(e) => {
            warn!("failed to read content file {}: {}", path.display(), e);
            None
        }
    }
}
