//! History data types
//!
//! - `core`: Shared utilities (clocks, errors)
//! - `objects`: Commit records, ids and stamping

pub mod core;
pub mod objects;
