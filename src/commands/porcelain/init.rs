use crate::areas::history::History;
use crate::areas::session::Session;
use anyhow::Context;
use std::io::Write;

impl Session {
    pub fn init(&mut self, name: &str) -> anyhow::Result<()> {
        let history = History::with_stamper(name, self.stamper().clone())
            .context("Failed to create history")?;
        self.insert_history(history)?;

        writeln!(self.writer(), "Initialized history {}", name)?;

        Ok(())
    }
}
