//! Path normalization operations
//!
//! Pure string-level path handling: canonicalization of dotted and
//! relative paths, parent computation and joining. None of these touch
//! table state or the host filesystem.

use crate::error::PathError;

/// Canonicalize a path string.
///
/// Empty segments (from `//` or leading/trailing `/`) and `.` segments are
/// dropped. A `..` segment pops the previously accepted segment; popping
/// past the start is a no-op for absolute paths (the root absorbs it) and
/// an error for relative paths. An absolute input always comes back with a
/// leading `/`; a relative input whose segments all cancel out comes back
/// as `"."`. The empty string stays empty.
pub fn normalize(path: &str) -> Result<String, PathError> {
    // special case
    if path.is_empty() {
        return Ok(String::new());
    }

    let is_absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                if segments.pop().is_none() && !is_absolute {
                    // relative path ascending above its own top level
                    return Err(PathError::Traversal(path.to_string()));
                }
                // absolute: "/" is the top folder, nothing to pop
            }
            other => segments.push(other),
        }
    }

    if is_absolute {
        return Ok(format!("/{}", segments.join("/")));
    }
    let joined = segments.join("/");
    if joined.is_empty() {
        // occurs when the origin path was "./", "././", ...
        return Ok(".".to_string());
    }
    Ok(joined)
}

/// Return the parent path (dirname).
///
/// Boundary conventions: the root is its own parent (`parent_of("/") ==
/// "/"`), a bare relative segment has the empty parent (`parent_of("a")
/// == ""`), and the empty path stays empty.
pub fn parent_of(path: &str) -> String {
    match path.rfind('/') {
        None => String::new(),
        Some(0) => "/".to_string(),
        Some(idx) => path[..idx].to_string(),
    }
}

/// Join a child name onto a base path with exactly one separator.
///
/// An absolute `name` replaces `base` entirely.
pub fn join(base: &str, name: &str) -> String {
    if name.starts_with('/') || base.is_empty() {
        return name.to_string();
    }
    if base.ends_with('/') {
        format!("{}{}", base, name)
    } else {
        format!("{}/{}", base, name)
    }
}
