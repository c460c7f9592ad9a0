//! Filesystem entry model
//!
//! The per-path metadata stored in the table, plus the argument structs
//! for file creation and update.

use serde::Deserialize;
use std::collections::HashMap;

use crate::layout::NodeSpec;

/// Kind of a filesystem entry. Mount entries carry no filetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    File,
    Folder,
}

/// Metadata stored for one canonical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub size: u64,
    pub owner: String,
    pub group: String,
    pub mode: u32,
    pub filetype: Option<FileType>,
    pub mount: bool,
    /// Reference to the content blob managed by the content collaborator.
    pub real_filename: Option<String>,
}

impl Entry {
    pub fn is_folder(&self) -> bool {
        self.mount || self.filetype == Some(FileType::Folder)
    }

    pub fn is_file(&self) -> bool {
        self.filetype == Some(FileType::File)
    }

    /// Entry for a partition attachment point. Its size is the
    /// partition's used space, not a sum of children.
    pub(crate) fn mount_root(size: u64) -> Self {
        Self {
            size,
            owner: "root".to_string(),
            group: "root".to_string(),
            mode: 755,
            filetype: None,
            mount: true,
            real_filename: None,
        }
    }

    /// Split a layout node into its flat entry and its nested children.
    pub(crate) fn from_spec(spec: NodeSpec) -> (Self, HashMap<String, NodeSpec>) {
        let entry = Self {
            size: spec.size,
            owner: spec.owner,
            group: spec.group,
            mode: spec.mode,
            filetype: Some(spec.filetype),
            mount: false,
            real_filename: spec.real_filename,
        };
        (entry, spec.content)
    }
}

impl From<NewFile> for Entry {
    fn from(spec: NewFile) -> Self {
        Self {
            size: spec.size,
            owner: spec.owner,
            group: spec.group,
            mode: spec.mode,
            filetype: Some(spec.filetype),
            mount: false,
            real_filename: None,
        }
    }
}

/// Attributes for a new file or folder.
#[derive(Debug, Clone)]
pub struct NewFile {
    pub filetype: FileType,
    pub size: u64,
    pub owner: String,
    pub group: String,
    pub mode: u32,
}

impl Default for NewFile {
    fn default() -> Self {
        Self {
            filetype: FileType::File,
            size: 0,
            owner: "root".to_string(),
            group: "root".to_string(),
            mode: 755,
        }
    }
}

impl NewFile {
    pub fn file(size: u64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn folder() -> Self {
        Self {
            filetype: FileType::Folder,
            ..Self::default()
        }
    }
}

/// Updatable attributes of an existing entry. Filetype is immutable
/// post-creation, so it has no slot here.
#[derive(Debug, Clone, Default)]
pub struct FileUpdate {
    pub size: Option<u64>,
    pub owner: Option<String>,
    pub group: Option<String>,
    pub mode: Option<u32>,
}

impl FileUpdate {
    pub fn size(size: u64) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }
}
