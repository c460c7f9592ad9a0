//! Layout document types
//!
//! Deserialized form of the declarative layout documents: disks,
//! partitions and the nested file/folder tree under each mount root.
//! These are plain data; all interpretation happens in the filesystem
//! merge step.

use serde::Deserialize;
use std::collections::HashMap;

use crate::filesystem::FileType;

/// A parsed layout document: `disks`, `partitions` and a `files` tree
/// keyed by mount root. All three sections are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub disks: HashMap<String, Disk>,
    #[serde(default)]
    pub partitions: HashMap<String, Partition>,
    #[serde(default)]
    pub files: HashMap<String, HashMap<String, NodeSpec>>,
}

/// Capacity metadata for a named disk. Lookup target for partitions,
/// no behavior of its own.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Disk {
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub device: Option<String>,
}

/// A named partition: owning disk, the absolute path it is mounted at,
/// and its used byte count.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Partition {
    #[serde(default)]
    pub disk: Option<String>,
    #[serde(default)]
    pub mount: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub used: u64,
}

/// One node of the nested `files` tree. `content` holds the named
/// children and is only meaningful for folders; the merge step flattens
/// it away.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeSpec {
    pub filetype: FileType,
    #[serde(default)]
    pub size: u64,
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_owner")]
    pub group: String,
    #[serde(default = "default_mode")]
    pub mode: u32,
    #[serde(default)]
    pub real_filename: Option<String>,
    #[serde(default)]
    pub content: HashMap<String, NodeSpec>,
}

/// Scenario overlay: an extra layout layer plus the scenario name used
/// to resolve where file content physically lives.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub scenario_name: Option<String>,
    #[serde(flatten)]
    pub layout: LayoutDocument,
}

fn default_owner() -> String {
    "root".to_string()
}

// Layout documents carry modes in the plain numeric convention (755),
// stored as metadata only.
fn default_mode() -> u32 {
    755
}
