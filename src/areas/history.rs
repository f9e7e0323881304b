//! Reverse-chronological commit history
//!
//! A [`History`] owns a singly-linked chain of commits through its `head` slot.
//! New commits are pushed in front of the head, so walking `past` links from the
//! head visits commits from newest to oldest.
//!
//! ## Merging
//!
//! [`History::synchronize`] moves every commit of another history into this one
//! while keeping the combined chain ordered by descending timestamp. The merge
//! walks a cursor over the *slots* of the destination chain (the head slot, then
//! each commit's `past` slot) and splices source commits into those slots:
//!
//! - A source commit is spliced into the current slot when it is strictly newer
//!   than the destination commit occupying it. Several consecutive source commits
//!   can land in the same gap; they keep their own order.
//! - On equal timestamps the destination commit stays ahead.
//! - Once the cursor runs past the destination tail, the rest of the source chain
//!   is grafted there as a whole.
//!
//! Each commit is relinked at most once and no back-pointers are needed, so the
//! merge runs in O(n + m).
//!
//! ## Debug Logging
//!
//! Splices are traced to stderr when the crate is built with the `debug_merge`
//! feature (`cargo build --features debug_merge`).

use crate::artifacts::core::error::{HistoryError, Result};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::stamper::Stamper;

/// Macro for debug logging that is enabled with the debug_merge feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Dropping commit {}", commit_id);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Named chain of commits, newest first
#[derive(Debug)]
pub struct History {
    name: String,
    head: Option<Box<Commit>>,
    stamper: Stamper,
}

impl History {
    /// Create an empty history stamped by the system clock and the process-wide ids
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `name` is empty
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_stamper(name, Stamper::default())
    }

    /// Create an empty history whose commits are stamped by `stamper`
    pub fn with_stamper(name: impl Into<String>, stamper: Stamper) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(HistoryError::invalid_argument("history name is empty"));
        }

        Ok(History {
            name,
            head: None,
            stamper,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Most recent commit, if any
    pub fn head(&self) -> Option<&Commit> {
        self.head.as_deref()
    }

    pub fn head_id(&self) -> Option<&CommitId> {
        self.head().map(Commit::id)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of commits, counted by walking the whole chain
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Commits from newest to oldest
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.head() }
    }

    /// Whether a commit with `id` is part of this history
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `id` is empty
    pub fn contains(&self, id: &str) -> Result<bool> {
        if id.is_empty() {
            return Err(HistoryError::invalid_argument("commit id is empty"));
        }

        Ok(self.iter().any(|commit| commit.id() == id))
    }

    /// Render the `n` most recent commits, newest first
    ///
    /// Returns fewer entries when the history holds fewer than `n` commits.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `n` is zero
    pub fn history(&self, n: usize) -> Result<Vec<String>> {
        if n == 0 {
            return Err(HistoryError::invalid_argument(
                "history length must be positive",
            ));
        }

        Ok(self.iter().take(n).map(Commit::to_string).collect())
    }

    /// Same entries as [`History::history`], each followed by a newline
    pub fn history_text(&self, n: usize) -> Result<String> {
        Ok(self
            .history(n)?
            .into_iter()
            .map(|entry| entry + "\n")
            .collect())
    }

    /// Record a new commit on top of the current head and return its id
    pub fn commit(&mut self, message: impl Into<String>) -> CommitId {
        let commit = Commit::stamped(message, self.head.take(), &self.stamper);
        let id = commit.id().clone();
        self.head = Some(Box::new(commit));

        id
    }

    /// Remove the newest commit with `id`, reconnecting its neighbours
    ///
    /// Returns `false` when no commit matches.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `id` is empty
    pub fn drop(&mut self, id: &str) -> Result<bool> {
        if id.is_empty() {
            return Err(HistoryError::invalid_argument("commit id is empty"));
        }

        let mut slot = &mut self.head;
        while slot.as_ref().is_some_and(|commit| commit.id() != id) {
            if let Some(commit) = slot {
                slot = &mut commit.past;
            }
        }

        let Some(mut removed) = slot.take() else {
            return Ok(false);
        };
        *slot = removed.past.take();
        debug_log!("[{}] dropped commit {}", self.name, removed.id());

        Ok(true)
    }

    /// Move every commit of `other` into this history, keeping timestamp order
    ///
    /// `other` is left empty. Commits keep their ids and timestamps.
    pub fn synchronize(&mut self, other: &mut History) {
        let mut source = other.head.take();
        let mut slot = &mut self.head;

        while let Some(mut incoming) = source.take() {
            // destination commits at least as new as the incoming one stay ahead
            while slot
                .as_ref()
                .is_some_and(|current| current.timestamp() >= incoming.timestamp())
            {
                if let Some(current) = slot {
                    slot = &mut current.past;
                }
            }

            if slot.is_none() {
                debug_log!(
                    "[{} <- {}] grafting {} and older at the tail",
                    self.name,
                    other.name,
                    incoming.id()
                );
                *slot = Some(incoming);
                break;
            }

            debug_log!(
                "[{} <- {}] splicing {} ahead of {:?}",
                self.name,
                other.name,
                incoming.id(),
                slot.as_ref().map(|current| current.id().to_string())
            );
            source = incoming.past.take();
            incoming.past = slot.take();
            slot = &mut slot.insert(incoming).past;
        }

        debug_log!(
            "[{} <- {}] synchronized, {} commits",
            self.name,
            other.name,
            self.size()
        );
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.head() {
            Some(head) => write!(f, "{} - Current head: {}", self.name, head),
            None => write!(f, "{} - No commits", self.name),
        }
    }
}

/// Borrowing iterator over a history, newest commit first
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<&'a Commit>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.next?;
        self.next = commit.past();
        Some(commit)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Commit;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
