//! Filesystem table
//!
//! The mutable runtime state of one simulated machine: disks, partitions
//! and the flat path-indexed entry map, plus construction and the query
//! surface. Mutations live in `operations`, layout merging in `merge`.

use log::warn;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::content;
use crate::error::{FsError, PathError, SimError};
use crate::filesystem::results::MergeOutcome;
use crate::filesystem::Entry;
use crate::layout::{self, Disk, Partition, ScenarioConfig};
use crate::path;

/// Path-indexed filesystem state for one simulated machine.
///
/// Entries are keyed by canonical absolute path in a `BTreeMap`, so
/// listings come out ordered and deterministic. Parent/child relations
/// are derived from the path strings; there are no stored references.
pub struct Filesystem {
    pub(crate) disks: HashMap<String, Disk>,
    pub(crate) partitions: HashMap<String, Partition>,
    pub(crate) entries: BTreeMap<String, Entry>,
    pub(crate) scenario_name: Option<String>,
    settings: Settings,
}

impl Filesystem {
    /// A table with no layout applied. Entry point for embedding and
    /// tests; normal construction goes through `new`/`with_scenario`.
    pub fn empty(settings: Settings) -> Self {
        Self {
            disks: HashMap::new(),
            partitions: HashMap::new(),
            entries: BTreeMap::new(),
            scenario_name: None,
            settings,
        }
    }

    /// Build a table from the configured default layout.
    pub fn new(settings: &Settings) -> Result<Self, SimError> {
        let mut table = Self::empty(settings.clone());
        table.add_layout(None)?;
        Ok(table)
    }

    /// Build a table from the default layout, then apply a scenario
    /// overlay as a second merge layer.
    pub fn with_scenario(
        settings: &Settings,
        scenario: ScenarioConfig,
    ) -> Result<Self, SimError> {
        let mut table = Self::new(settings)?;
        table.scenario_name = scenario.scenario_name;
        table.merge_layout(scenario.layout);
        Ok(table)
    }

    /// Merge an extra layout file into the table, defaulting to the
    /// configured layout path. Later layers override existing disks,
    /// partitions and entries.
    pub fn add_layout(&mut self, layout_file: Option<&Path>) -> Result<MergeOutcome, SimError> {
        let path = layout_file
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.settings.layout_path));
        let doc = layout::load_layout(&path)?;
        Ok(self.merge_layout(doc))
    }

    /// Whether a path is present in the table.
    pub fn exists(&self, path: &str) -> Result<bool, PathError> {
        let path = path::normalize(path)?;
        Ok(self.entries.contains_key(&path))
    }

    /// Whether a path exists and is a folder (mount entries count).
    pub fn is_folder(&self, path: &str) -> Result<bool, PathError> {
        let path = path::normalize(path)?;
        Ok(self.entries.get(&path).is_some_and(Entry::is_folder))
    }

    /// Whether a path exists and is a file.
    pub fn is_file(&self, path: &str) -> Result<bool, PathError> {
        let path = path::normalize(path)?;
        Ok(self.entries.get(&path).is_some_and(Entry::is_file))
    }

    /// Paths of the direct children of `path`, in table order.
    ///
    /// A key qualifies only if its parent path equals `path` exactly;
    /// a shared string prefix is not enough.
    pub fn children_of(&self, path: &str) -> Result<Vec<String>, PathError> {
        let path = path::normalize(path)?;
        Ok(self
            .entries
            .keys()
            .filter(|key| *key != &path && path::parent_of(key.as_str()) == path)
            .cloned()
            .collect())
    }

    /// The entry at `path`, or `None` with a diagnostic when absent.
    pub fn details(&self, path: &str) -> Result<Option<&Entry>, PathError> {
        let path = path::normalize(path)?;
        let entry = self.entries.get(&path);
        if entry.is_none() {
            warn!("{}: No such file or directory", path);
        }
        Ok(entry)
    }

    pub fn disk(&self, name: &str) -> Option<&Disk> {
        self.disks.get(name)
    }

    pub fn partition(&self, name: &str) -> Option<&Partition> {
        self.partitions.get(name)
    }

    pub fn partitions(&self) -> &HashMap<String, Partition> {
        &self.partitions
    }

    pub fn scenario_name(&self) -> Option<&str> {
        self.scenario_name.as_deref()
    }

    /// Number of entries in the table (mount entries included).
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Read the content of a logical file as lines.
    ///
    /// Resolves the entry's stored `real_filename` against the configured
    /// content root (plus the scenario subdirectory when a scenario was
    /// recorded) and delegates to the content collaborator. Any form of
    /// absence yields `Ok(None)`: path missing, not a file, no stored
    /// reference, or the host resource not being there.
    pub fn read_file(&self, path: &str) -> Result<Option<Vec<String>>, FsError> {
        let path = path::normalize(path)?;
        let Some(entry) = self.entries.get(&path) else {
            return Ok(None);
        };
        if !entry.is_file() {
            return Ok(None);
        }
        let Some(real_filename) = entry.real_filename.as_deref() else {
            return Ok(None);
        };
        let real_path = content::resolve_content_path(
            Path::new(&self.settings.files_root),
            self.scenario_name.as_deref(),
            real_filename,
        );
        Ok(content::read_lines(&real_path))
    }
}
