//! Filesystem mutations
//!
//! Create, update and remove operations, and the upward size-propagation
//! walk that keeps ancestor folder sizes consistent. Every size change in
//! the table routes through `propagate_size`.

use log::warn;

use crate::error::FsError;
use crate::filesystem::table::Filesystem;
use crate::filesystem::{Entry, FileUpdate, NewFile};
use crate::path;

impl Filesystem {
    /// Add a file or folder, updating ancestor sizes if needed.
    pub fn add_file(&mut self, path: &str, spec: NewFile) -> Result<(), FsError> {
        let path = path::normalize(path)?;
        if self.entries.contains_key(&path) {
            return Err(FsError::AlreadyExists(path));
        }
        let size = spec.size;
        self.entries.insert(path.clone(), Entry::from(spec));
        if size != 0 {
            self.propagate_size(&path, size as i64);
        }
        Ok(())
    }

    /// Update an existing entry. Only size, owner, group and mode can
    /// change; a size change propagates its delta upward.
    pub fn update_file(&mut self, path: &str, update: FileUpdate) -> Result<(), FsError> {
        let path = path::normalize(path)?;
        let Some(entry) = self.entries.get_mut(&path) else {
            return Err(FsError::NotFound(path));
        };
        let mut delta = 0i64;
        if let Some(size) = update.size {
            delta = size as i64 - entry.size as i64;
            entry.size = size;
        }
        if let Some(owner) = update.owner {
            entry.owner = owner;
        }
        if let Some(group) = update.group {
            entry.group = group;
        }
        if let Some(mode) = update.mode {
            entry.mode = mode;
        }
        if delta != 0 {
            self.propagate_size(&path, delta);
        }
        Ok(())
    }

    /// Remove a file or folder, releasing its used space.
    ///
    /// Mount points are never removable here; they are detached only by
    /// changing the layout layer. Folders require `recursive`, and a
    /// recursive removal validates the whole subtree before deleting
    /// anything, so a failure leaves the table untouched.
    pub fn remove_file(&mut self, path: &str, recursive: bool) -> Result<(), FsError> {
        let path = path::normalize(path)?;
        let Some(entry) = self.entries.get(&path) else {
            return Err(FsError::NotFound(path));
        };
        if entry.mount {
            return Err(FsError::MountPoint(path));
        }
        if entry.is_folder() {
            if !recursive {
                return Err(FsError::IsAFolder(path));
            }
            let subtree = self.collect_subtree(&path)?;
            // children before parents, so each deletion's propagation
            // still finds its ancestors
            for victim in subtree.iter().rev() {
                self.delete_entry(victim);
            }
            return Ok(());
        }
        self.delete_entry(&path);
        Ok(())
    }

    /// Breadth-first listing of `root` and every descendant, parents
    /// first. Fails without side effects if the subtree contains a
    /// mount point.
    fn collect_subtree(&self, root: &str) -> Result<Vec<String>, FsError> {
        let mut ordered = vec![root.to_string()];
        let mut cursor = 0;
        while cursor < ordered.len() {
            let base = ordered[cursor].clone();
            for (key, entry) in &self.entries {
                if key != &base && path::parent_of(key) == base {
                    if entry.mount {
                        return Err(FsError::MountPoint(key.clone()));
                    }
                    ordered.push(key.clone());
                }
            }
            cursor += 1;
        }
        Ok(ordered)
    }

    /// Drop one entry, releasing its stored size upward.
    fn delete_entry(&mut self, path: &str) {
        if let Some(entry) = self.entries.remove(path) {
            if entry.size != 0 {
                self.propagate_size(path, -(entry.size as i64));
            }
        }
    }

    /// Walk upward from `path`, applying `delta` to each ancestor entry.
    ///
    /// The walk stops before a mount entry (mount sizes are
    /// partition-derived, never child-summed) and at the table root.
    pub(crate) fn propagate_size(&mut self, path: &str, delta: i64) {
        let mut current = path.to_string();
        loop {
            let parent = path::parent_of(&current);
            if parent == current || parent.is_empty() {
                break;
            }
            match self.entries.get_mut(&parent) {
                Some(entry) => {
                    if entry.mount {
                        break;
                    }
                    entry.size = entry.size.saturating_add_signed(delta);
                    current = parent;
                }
                None => {
                    warn!("size propagation hit a missing ancestor at {}", parent);
                    break;
                }
            }
        }
    }
}
