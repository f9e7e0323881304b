use crate::areas::session::Session;
use std::io::Write;

impl Session {
    /// Print the `limit` most recent commits of a history, or all of them
    pub fn log(&self, name: &str, limit: Option<usize>) -> anyhow::Result<()> {
        let history = self.history(name)?;

        let limit = match limit {
            Some(limit) => limit,
            None if history.is_empty() => return Ok(()),
            None => history.size(),
        };

        write!(self.writer(), "{}", history.history_text(limit)?)?;

        Ok(())
    }
}
