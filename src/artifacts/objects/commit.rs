//! Commit record
//!
//! A commit is an immutable record of one change:
//! - An id (unique across the process)
//! - A message
//! - The instant it was created
//!
//! plus a single link to the commit made immediately before it. The link is the
//! only mutable part and is rewritten only when a history drops or merges commits.
//!
//! ## Format
//!
//! Rendered as:
//! ```text
//! <id> at <yyyy-mm-dd> at <HH:MM:SS> <zone>: <message>
//! ```

use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::stamper::Stamper;
use chrono::{DateTime, FixedOffset};

/// `strftime` pattern used when rendering commit timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d at %H:%M:%S %z";

/// Single entry of a history
///
/// Owns the rest of the older history through `past`.
#[derive(Debug)]
pub struct Commit {
    /// Unique id handed out by the stamper
    id: CommitId,
    /// Commit message, possibly empty
    message: String,
    /// Creation instant
    timestamp: DateTime<FixedOffset>,
    /// The commit made before this one, if any
    pub(crate) past: Option<Box<Commit>>,
}

impl Commit {
    /// Create a commit stamped by the default clock and the process-wide id counter
    ///
    /// # Arguments
    ///
    /// * `message` - Commit message
    /// * `past` - The commit made immediately before this one (None for the first commit)
    pub fn new(message: impl Into<String>, past: Option<Box<Commit>>) -> Self {
        Self::stamped(message, past, &Stamper::default())
    }

    /// Create a commit whose id and timestamp come from `stamper`
    pub fn stamped(
        message: impl Into<String>,
        past: Option<Box<Commit>>,
        stamper: &Stamper,
    ) -> Self {
        let (id, timestamp) = stamper.stamp();

        Commit {
            id,
            message: message.into(),
            timestamp,
            past,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// The commit made immediately before this one
    pub fn past(&self) -> Option<&Commit> {
        self.past.as_deref()
    }

    /// Format the timestamp the way it appears in the rendered commit
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl std::fmt::Display for Commit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}: {}",
            self.id,
            self.readable_timestamp(),
            self.message
        )
    }
}

// Tear the chain down iteratively so long histories cannot overflow the stack.
impl Drop for Commit {
    fn drop(&mut self) {
        let mut past = self.past.take();
        while let Some(mut commit) = past {
            past = commit.past.take();
        }
    }
}
