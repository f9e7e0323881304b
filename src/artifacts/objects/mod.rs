//! Commit records and the collaborators that stamp them
//!
//! - **Commit**: Immutable id, message and timestamp plus a link to the previous commit
//! - **CommitId**: Identifier handed out by an id generator
//! - **Stamper**: Clock and id generator used together when a commit is created

pub mod commit;
pub mod commit_id;
pub mod stamper;
