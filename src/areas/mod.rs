//! Commit history containers
//!
//! - `history`: The reverse-chronological commit chain and its merge algorithm
//! - `session`: Named histories and the output writer used by the command line

pub mod history;
pub mod session;
