//! Layout file loading
//!
//! Reads a layout document from a JSON file on the host.

use std::fs;
use std::path::Path;

use crate::error::LayoutError;
use crate::layout::LayoutDocument;

/// Load and parse a layout document from `path`.
pub fn load_layout(path: &Path) -> Result<LayoutDocument, LayoutError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| LayoutError::Read(path.display().to_string(), e))?;
    serde_json::from_str(&raw).map_err(|e| LayoutError::Parse(path.display().to_string(), e))
}
