//! Porcelain commands (user-facing history operations)
//!
//! Each command resolves the histories it names in the session, runs one
//! history operation and reports the outcome to the session writer.
//!
//! ## Commands
//!
//! - `init`: Create an empty history
//! - `commit`: Record a new commit
//! - `log`: Show the most recent commits
//! - `size`, `head`, `show`, `contains`: Inspect a history
//! - `drop`: Remove a commit
//! - `sync`: Merge one history into another

pub mod commit;
pub mod drop;
pub mod init;
pub mod inspect;
pub mod log;
pub mod sync;
