//! Commit identifiers and their generators
//!
//! Ids are short decimal strings handed out by an [`IdGenerator`]. The default
//! generator is a single process-wide counter, so two histories never hand out
//! the same id and merged chains keep ids unique.
//!
//! ## Format
//!
//! - First id: `0`
//! - Following ids: `1`, `2`, ... in creation order

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of a single commit
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        CommitId(id.into())
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CommitId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CommitId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of unique, strictly increasing commit ids
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> CommitId;
}

/// Counter owned by a single generator instance
///
/// Useful when a test wants ids that start from `0` without touching the
/// process-wide counter other tests share.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub const fn new() -> Self {
        SequentialIds {
            next: AtomicU64::new(0),
        }
    }

    /// Counter whose first id is `start`
    pub const fn starting_at(start: u64) -> Self {
        SequentialIds {
            next: AtomicU64::new(start),
        }
    }

    fn reset(&self) {
        self.next.store(0, Ordering::SeqCst);
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> CommitId {
        CommitId(self.next.fetch_add(1, Ordering::SeqCst).to_string())
    }
}

static PROCESS_IDS: SequentialIds = SequentialIds::new();

/// The process-wide id counter shared by every history using the default stamper
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessIds;

impl ProcessIds {
    /// Restart the process-wide counter at `0`.
    ///
    /// Test support only. Commits created before the reset keep their ids, so
    /// calling this while earlier commits are still alive breaks id uniqueness.
    pub fn reset() {
        PROCESS_IDS.reset();
    }
}

impl IdGenerator for ProcessIds {
    fn next_id(&self) -> CommitId {
        PROCESS_IDS.next_id()
    }
}
