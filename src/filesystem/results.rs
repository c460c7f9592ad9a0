//! Filesystem result types
//!
//! Defines result structures returned by table operations.

/// Result of merging one layout document.
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    /// Mount roots processed.
    pub mounts: usize,
    /// File and folder entries materialized (mount entries excluded).
    pub entries: usize,
    /// Mount roots whose partition association was missing or ambiguous.
    pub issues: Vec<MountIssue>,
}

/// A recoverable partition/mount association problem found during merge.
/// The mount was materialized with size 0.
#[derive(Debug, Clone)]
pub struct MountIssue {
    pub root: String,
    /// How many partitions claimed the root (anything but 1 is an issue).
    pub matched: usize,
}
