//! Core utilities and shared types
//!
//! - `clock`: Timestamp sources for new commits
//! - `error`: Error type returned by history operations

pub mod clock;
pub mod error;
