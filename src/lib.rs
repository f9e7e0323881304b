//! A minimal commit log
//!
//! A [`History`] is a singly-linked, reverse-chronological chain of immutable
//! [`Commit`]s. Histories can be appended to, inspected, pruned and merged with
//! one another while staying ordered by timestamp.
//!
//! ```
//! use minigit::History;
//!
//! let mut history = History::new("repo").unwrap();
//! let first = history.commit("first");
//! history.commit("second");
//!
//! assert_eq!(history.size(), 2);
//! assert!(history.contains(first.as_ref()).unwrap());
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::history::History;
pub use areas::session::Session;
pub use artifacts::core::clock::{Clock, SteppingClock, SystemClock};
pub use artifacts::core::error::{HistoryError, Result};
pub use artifacts::objects::commit::Commit;
pub use artifacts::objects::commit_id::{CommitId, IdGenerator, ProcessIds, SequentialIds};
pub use artifacts::objects::stamper::Stamper;
