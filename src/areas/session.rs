use crate::areas::history::History;
use crate::artifacts::objects::stamper::Stamper;
use std::cell::{RefCell, RefMut};
use std::collections::HashMap;

/// Named histories driven by the command line, plus the writer commands report to
///
/// Every history created through a session shares the session's stamper, so ids
/// stay unique across histories and merges keep them unique.
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    stamper: Stamper,
    histories: HashMap<String, History>,
}

impl Session {
    pub fn new(writer: Box<dyn std::io::Write>, stamper: Stamper) -> Self {
        Session {
            writer: RefCell::new(writer),
            stamper,
            histories: HashMap::new(),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn stamper(&self) -> &Stamper {
        &self.stamper
    }

    pub fn history(&self, name: &str) -> anyhow::Result<&History> {
        self.histories
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown history: {}", name))
    }

    pub fn history_mut(&mut self, name: &str) -> anyhow::Result<&mut History> {
        self.histories
            .get_mut(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown history: {}", name))
    }

    pub(crate) fn insert_history(&mut self, history: History) -> anyhow::Result<()> {
        if self.histories.contains_key(history.name()) {
            anyhow::bail!("History already exists: {}", history.name());
        }
        self.histories.insert(history.name().to_string(), history);

        Ok(())
    }

    pub(crate) fn remove_history(&mut self, name: &str) -> anyhow::Result<History> {
        self.histories
            .remove(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown history: {}", name))
    }
}
