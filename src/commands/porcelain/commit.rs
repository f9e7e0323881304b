use crate::areas::session::Session;
use std::io::Write;

impl Session {
    pub fn commit(&mut self, name: &str, message: &str) -> anyhow::Result<()> {
        let commit_id = self.history_mut(name)?.commit(message);

        writeln!(self.writer(), "[{} {}] {}", name, commit_id, message)?;

        Ok(())
    }
}
