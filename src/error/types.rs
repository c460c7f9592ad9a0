//! Error types
//!
//! Defines domain-specific error types for each module of the simulator.

use std::fmt;
use std::io;

/// Path normalization errors
#[derive(Debug)]
pub enum PathError {
    /// A relative path tried to ascend above its own top level.
    Traversal(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Traversal(p) => write!(
                f,
                "cannot go higher than the top level of a relative path: {}",
                p
            ),
        }
    }
}

impl std::error::Error for PathError {}

/// Filesystem table errors
#[derive(Debug)]
pub enum FsError {
    NotFound(String),
    AlreadyExists(String),
    MountPoint(String),
    IsAFolder(String),
    Path(PathError),
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::NotFound(p) => write!(f, "{}: No such file or directory", p),
            FsError::AlreadyExists(p) => write!(f, "{}: file or directory already exists", p),
            FsError::MountPoint(p) => {
                write!(f, "cannot remove '{}': Device or resource busy", p)
            }
            FsError::IsAFolder(p) => write!(f, "cannot remove '{}': Is a directory", p),
            FsError::Path(e) => write!(f, "Path error: {}", e),
        }
    }
}

impl std::error::Error for FsError {}

impl From<PathError> for FsError {
    fn from(error: PathError) -> Self {
        FsError::Path(error)
    }
}

/// Layout document loading errors
#[derive(Debug)]
pub enum LayoutError {
    Read(String, io::Error),
    Parse(String, serde_json::Error),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Read(p, e) => write!(f, "Failed to read layout {}: {}", p, e),
            LayoutError::Parse(p, e) => write!(f, "Failed to parse layout {}: {}", p, e),
        }
    }
}

impl std::error::Error for LayoutError {}

/// General simulator error that encompasses all error types
#[derive(Debug)]
pub enum SimError {
    Path(PathError),
    Fs(FsError),
    Layout(LayoutError),
    Config(config::ConfigError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Path(e) => write!(f, "Path error: {}", e),
            SimError::Fs(e) => write!(f, "Filesystem error: {}", e),
            SimError::Layout(e) => write!(f, "Layout error: {}", e),
            SimError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for SimError {}

// Implement conversions from specific errors to SimError
impl From<PathError> for SimError {
    fn from(error: PathError) -> Self {
        SimError::Path(error)
    }
}

impl From<FsError> for SimError {
    fn from(error: FsError) -> Self {
        SimError::Fs(error)
    }
}

impl From<LayoutError> for SimError {
    fn from(error: LayoutError) -> Self {
        SimError::Layout(error)
    }
}

impl From<config::ConfigError> for SimError {
    fn from(error: config::ConfigError) -> Self {
        SimError::Config(error)
    }
}
