use crate::areas::session::Session;
use std::io::Write;

impl Session {
    pub fn size(&self, name: &str) -> anyhow::Result<()> {
        let size = self.history(name)?.size();
        writeln!(self.writer(), "{}", size)?;

        Ok(())
    }

    pub fn head(&self, name: &str) -> anyhow::Result<()> {
        match self.history(name)?.head_id() {
            Some(commit_id) => writeln!(self.writer(), "{}", commit_id)?,
            None => writeln!(self.writer(), "(none)")?,
        }

        Ok(())
    }

    pub fn show(&self, name: &str) -> anyhow::Result<()> {
        let history = self.history(name)?;
        writeln!(self.writer(), "{}", history)?;

        Ok(())
    }

    pub fn contains(&self, name: &str, commit_id: &str) -> anyhow::Result<()> {
        let found = self.history(name)?.contains(commit_id)?;
        writeln!(self.writer(), "{}", found)?;

        Ok(())
    }
}
