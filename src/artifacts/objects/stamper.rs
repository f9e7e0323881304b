//! Id and timestamp assignment for new commits

use crate::artifacts::core::clock::{Clock, SystemClock};
use crate::artifacts::objects::commit_id::{CommitId, IdGenerator, ProcessIds};
use chrono::{DateTime, FixedOffset};
use derive_new::new;
use std::sync::Arc;

/// Pairs a clock with an id generator
///
/// Cloning a stamper shares the underlying clock and generator, so histories
/// built from clones of one stamper draw ids from the same counter.
#[derive(Clone, new)]
pub struct Stamper {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl Stamper {
    /// Hand out the next id together with the current instant
    pub fn stamp(&self) -> (CommitId, DateTime<FixedOffset>) {
        (self.ids.next_id(), self.clock.now())
    }
}

impl Default for Stamper {
    fn default() -> Self {
        Stamper::new(Arc::new(SystemClock), Arc::new(ProcessIds))
    }
}

impl std::fmt::Debug for Stamper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stamper").finish_non_exhaustive()
    }
}
