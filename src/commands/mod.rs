//! History command implementations
//!
//! - `porcelain`: User-facing commands operating on the histories of a session
//! - `script`: Parsing and execution of line-oriented history scripts

pub mod porcelain;
pub mod script;
