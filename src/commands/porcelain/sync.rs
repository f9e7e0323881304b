use crate::areas::session::Session;
use std::io::Write;

impl Session {
    /// Merge the `source` history into `destination`, leaving `source` empty
    pub fn sync(&mut self, destination: &str, source: &str) -> anyhow::Result<()> {
        if destination == source {
            anyhow::bail!("Cannot synchronize history {} with itself", destination);
        }

        // take the source out of the session so both histories can be borrowed mutably
        let mut source_history = self.remove_history(source)?;
        let merged = self.history_mut(destination).map(|history| {
            history.synchronize(&mut source_history);
            history.size()
        });
        self.insert_history(source_history)?;
        let size = merged?;

        writeln!(
            self.writer(),
            "Synchronized {} into {} ({} commits)",
            source,
            destination,
            size
        )?;

        Ok(())
    }
}
