//! Layout merging
//!
//! Flattens a parsed layout document into the table: disks and partitions
//! are unioned (later layers win), each mount root becomes a mount entry
//! sized from its partition's used space, and the nested file tree is
//! materialized as flat path-keyed entries.

use log::warn;
use std::collections::HashMap;

use crate::filesystem::results::{MergeOutcome, MountIssue};
use crate::filesystem::table::Filesystem;
use crate::filesystem::Entry;
use crate::layout::{LayoutDocument, NodeSpec};
use crate::path;

impl Filesystem {
    /// Merge a parsed layout document into the table.
    ///
    /// Order-independent across mount roots; within a root, a folder is
    /// always materialized before its children. Missing or ambiguous
    /// partition associations are recoverable: the mount proceeds with
    /// size 0 and the condition is reported in the outcome.
    pub fn merge_layout(&mut self, doc: LayoutDocument) -> MergeOutcome {
        self.disks.extend(doc.disks);
        self.partitions.extend(doc.partitions);

        let mut outcome = MergeOutcome::default();
        for (root, content) in doc.files {
            let matched: Vec<u64> = self
                .partitions
                .values()
                .filter(|part| part.mount.as_deref() == Some(root.as_str()))
                .map(|part| part.used)
                .collect();
            let size = if matched.len() == 1 {
                matched[0]
            } else {
                warn!(
                    "associated partition with mount point {} is missing or ambiguous ({} matched)",
                    root,
                    matched.len()
                );
                outcome.issues.push(MountIssue {
                    root: root.clone(),
                    matched: matched.len(),
                });
                0
            };
            // Mount entries are the roots of size propagation; their size
            // is partition-derived and never propagated further.
            self.entries.insert(root.clone(), Entry::mount_root(size));
            outcome.mounts += 1;

            // Explicit worklist keeps the descent depth-independent; an
            // entry is inserted before its children are pushed, so every
            // child finds its parent in the table.
            let mut work: Vec<(String, HashMap<String, NodeSpec>)> = vec![(root, content)];
            while let Some((base, nodes)) = work.pop() {
                for (name, spec) in nodes {
                    let child = path::join(&base, &name);
                    let (entry, nested) = Entry::from_spec(spec);
                    self.insert_merged(child.clone(), entry);
                    outcome.entries += 1;
                    if !nested.is_empty() {
                        work.push((child, nested));
                    }
                }
            }
        }
        outcome
    }

    /// Insert one merged node, keeping ancestor folder sizes consistent.
    ///
    /// On overwrite only the size difference moves. A re-declared folder
    /// keeps its accumulated size: its surviving children are still in
    /// the table and already counted, so resetting it would break the
    /// sum-of-children invariant.
    fn insert_merged(&mut self, child: String, mut entry: Entry) {
        let old_size = self.entries.get(&child).map(|prev| prev.size);
        if let Some(old) = old_size {
            if entry.is_folder() {
                entry.size = old;
            }
        }
        let delta = entry.size as i64 - old_size.unwrap_or(0) as i64;
        self.entries.insert(child.clone(), entry);
        if delta != 0 {
            self.propagate_size(&child, delta);
        }
    }
}
