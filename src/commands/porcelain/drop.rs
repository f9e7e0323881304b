use crate::areas::session::Session;
use std::io::Write;

impl Session {
    pub fn drop_commit(&mut self, name: &str, commit_id: &str) -> anyhow::Result<()> {
        let dropped = self.history_mut(name)?.drop(commit_id)?;

        if dropped {
            writeln!(self.writer(), "Dropped {} from {}", commit_id, name)?;
        } else {
            writeln!(self.writer(), "Commit {} not found in {}", commit_id, name)?;
        }

        Ok(())
    }
}
