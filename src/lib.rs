//! simfs: a synthetic filesystem for simulation environments
//!
//! Models a tree of disks, partitions, mount points, files and folders,
//! built from declarative JSON layout documents and mutated at runtime
//! while keeping space accounting consistent: paths resolve, folders
//! report aggregate size, and removing a file frees space up through its
//! mount. No real storage device is touched for the simulated state.

pub mod config;
pub mod content;
pub mod error;
pub mod filesystem;
pub mod layout;
pub mod path;

pub use config::Settings;
pub use error::{FsError, LayoutError, PathError, SimError};
pub use filesystem::{Entry, FileType, FileUpdate, Filesystem, MergeOutcome, NewFile};
pub use layout::{LayoutDocument, ScenarioConfig};
