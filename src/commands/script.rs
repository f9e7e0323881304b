//! Line-oriented history scripts
//!
//! A script drives a [`Session`] one command per line. Blank lines and lines
//! starting with `#` are skipped.
//!
//! ## Format
//!
//! ```text
//! init <name>
//! commit <name> <message...>
//! log <name> [n]
//! size <name>
//! head <name>
//! show <name>
//! contains <name> <id>
//! drop <name> <id>
//! sync <destination> <source>
//! ```
//!
//! Commit messages may be wrapped in double quotes, which are stripped.

use crate::areas::session::Session;
use anyhow::Context;
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;

/// Regex splitting a script line into its verb and the remaining arguments
const LINE_REGEX: &str = r"^\s*(?P<verb>[a-z]+)(?:\s+(?P<rest>.*?))?\s*$";

/// Regex splitting `commit` arguments into the history name and the message
const COMMIT_REGEX: &str = r"^(?P<name>\S+)(?:\s+(?P<message>.*))?$";

static LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(LINE_REGEX).expect("valid regex"));
static COMMIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COMMIT_REGEX).expect("valid regex"));

/// A single parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Init { name: String },
    Commit { name: String, message: String },
    Log { name: String, limit: Option<usize> },
    Size { name: String },
    Head { name: String },
    Show { name: String },
    Contains { name: String, commit_id: String },
    Drop { name: String, commit_id: String },
    Sync { destination: String, source: String },
}

impl ScriptCommand {
    /// Parse one script line
    ///
    /// # Returns
    ///
    /// `None` for blank lines and comments
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let captures = LINE
            .captures(trimmed)
            .ok_or_else(|| anyhow::anyhow!("Invalid script line: {}", trimmed))?;
        let verb = &captures["verb"];
        let rest = captures.name("rest").map_or("", |rest| rest.as_str());

        let command = match verb {
            "commit" => {
                let captures = COMMIT
                    .captures(rest)
                    .ok_or_else(|| anyhow::anyhow!("usage: commit <name> <message>"))?;
                let message = captures.name("message").map_or("", |m| m.as_str());

                ScriptCommand::Commit {
                    name: captures["name"].to_string(),
                    message: unquote(message).to_string(),
                }
            }
            "init" => {
                let [name] = arguments::<1>(rest, "init <name>")?;
                ScriptCommand::Init { name }
            }
            "log" => {
                let args = rest.split_whitespace().collect::<Vec<_>>();
                match args.as_slice() {
                    [name] => ScriptCommand::Log {
                        name: name.to_string(),
                        limit: None,
                    },
                    [name, limit] => ScriptCommand::Log {
                        name: name.to_string(),
                        limit: Some(
                            limit
                                .parse::<usize>()
                                .with_context(|| format!("Invalid log length: {}", limit))?,
                        ),
                    },
                    _ => anyhow::bail!("usage: log <name> [n]"),
                }
            }
            "size" => {
                let [name] = arguments::<1>(rest, "size <name>")?;
                ScriptCommand::Size { name }
            }
            "head" => {
                let [name] = arguments::<1>(rest, "head <name>")?;
                ScriptCommand::Head { name }
            }
            "show" => {
                let [name] = arguments::<1>(rest, "show <name>")?;
                ScriptCommand::Show { name }
            }
            "contains" => {
                let [name, commit_id] = arguments::<2>(rest, "contains <name> <id>")?;
                ScriptCommand::Contains { name, commit_id }
            }
            "drop" => {
                let [name, commit_id] = arguments::<2>(rest, "drop <name> <id>")?;
                ScriptCommand::Drop { name, commit_id }
            }
            "sync" => {
                let [destination, source] = arguments::<2>(rest, "sync <destination> <source>")?;
                ScriptCommand::Sync {
                    destination,
                    source,
                }
            }
            _ => anyhow::bail!("Unknown command: {}", verb),
        };

        Ok(Some(command))
    }
}

/// Split `rest` into exactly `N` whitespace separated arguments
fn arguments<const N: usize>(rest: &str, usage: &str) -> anyhow::Result<[String; N]> {
    let args = rest
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();

    args.try_into()
        .map_err(|_| anyhow::anyhow!("usage: {}", usage))
}

fn unquote(message: &str) -> &str {
    message
        .strip_prefix('"')
        .and_then(|message| message.strip_suffix('"'))
        .unwrap_or(message)
}

impl Session {
    pub fn execute(&mut self, command: ScriptCommand) -> anyhow::Result<()> {
        match command {
            ScriptCommand::Init { name } => self.init(&name),
            ScriptCommand::Commit { name, message } => self.commit(&name, &message),
            ScriptCommand::Log { name, limit } => self.log(&name, limit),
            ScriptCommand::Size { name } => self.size(&name),
            ScriptCommand::Head { name } => self.head(&name),
            ScriptCommand::Show { name } => self.show(&name),
            ScriptCommand::Contains { name, commit_id } => self.contains(&name, &commit_id),
            ScriptCommand::Drop { name, commit_id } => self.drop_commit(&name, &commit_id),
            ScriptCommand::Sync {
                destination,
                source,
            } => self.sync(&destination, &source),
        }
    }

    /// Parse and execute one script line; `line_number` is 1-based
    pub fn execute_line(&mut self, line_number: usize, line: &str) -> anyhow::Result<()> {
        let command = ScriptCommand::parse(line)
            .with_context(|| format!("line {}: {}", line_number, line.trim()))?;

        if let Some(command) = command {
            self.execute(command)
                .with_context(|| format!("line {}: {}", line_number, line.trim()))?;
        }

        Ok(())
    }

    /// Execute every line of a script, stopping at the first failure
    pub fn run_script(&mut self, reader: impl BufRead) -> anyhow::Result<()> {
        for (index, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read script")?;
            self.execute_line(index + 1, &line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::core::clock::SteppingClock;
    use crate::artifacts::objects::commit_id::SequentialIds;
    use crate::artifacts::objects::stamper::Stamper;
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Writer collecting session output for inspection
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn session() -> (Session, SharedBuffer) {
        let start = SteppingClock::parse_start("2024-03-01 12:00:00 +0000").unwrap();
        let stamper = Stamper::new(
            Arc::new(SteppingClock::new(start, TimeDelta::seconds(1))),
            Arc::new(SequentialIds::new()),
        );
        let buffer = SharedBuffer::default();

        (Session::new(Box::new(buffer.clone()), stamper), buffer)
    }

    #[rstest]
    #[case("", None)]
    #[case("   ", None)]
    #[case("# a comment", None)]
    #[case("init repo1", Some(ScriptCommand::Init { name: "repo1".to_string() }))]
    #[case("  size repo1  ", Some(ScriptCommand::Size { name: "repo1".to_string() }))]
    #[case(
        "log repo1 3",
        Some(ScriptCommand::Log { name: "repo1".to_string(), limit: Some(3) })
    )]
    #[case(
        "log repo1",
        Some(ScriptCommand::Log { name: "repo1".to_string(), limit: None })
    )]
    #[case(
        "drop repo1 4",
        Some(ScriptCommand::Drop { name: "repo1".to_string(), commit_id: "4".to_string() })
    )]
    #[case(
        "sync repo1 repo2",
        Some(ScriptCommand::Sync { destination: "repo1".to_string(), source: "repo2".to_string() })
    )]
    fn test_parse_valid_lines(#[case] line: &str, #[case] expected: Option<ScriptCommand>) {
        assert_eq!(ScriptCommand::parse(line).unwrap(), expected);
    }

    #[rstest]
    #[case("commit repo1 fix the parser", "fix the parser")]
    #[case("commit repo1 \"quoted  message\"", "quoted  message")]
    #[case("commit repo1 \"\"", "")]
    #[case("commit repo1", "")]
    fn test_parse_commit_messages(#[case] line: &str, #[case] message: &str) {
        assert_eq!(
            ScriptCommand::parse(line).unwrap(),
            Some(ScriptCommand::Commit {
                name: "repo1".to_string(),
                message: message.to_string(),
            })
        );
    }

    #[rstest]
    #[case("frobnicate repo1")]
    #[case("init")]
    #[case("init a b")]
    #[case("drop repo1")]
    #[case("sync repo1")]
    #[case("log repo1 many")]
    #[case("log repo1 -1")]
    #[case("commit")]
    #[case("INIT repo1")]
    fn test_parse_invalid_lines(#[case] line: &str) {
        assert!(ScriptCommand::parse(line).is_err(), "{line} should not parse");
    }

    #[test]
    fn test_run_script_reports_every_command() {
        let (mut session, buffer) = session();
        let script = "\
init repo1
init repo2
commit repo1 first
commit repo2 second
commit repo1 third
sync repo1 repo2
size repo1
size repo2
head repo1
head repo2
contains repo1 1
drop repo1 1
drop repo1 1
log repo1
show repo2
";

        session.run_script(script.as_bytes()).unwrap();

        assert_eq!(
            buffer.contents(),
            "\
Initialized history repo1
Initialized history repo2
[repo1 0] first
[repo2 1] second
[repo1 2] third
Synchronized repo2 into repo1 (3 commits)
3
0
2
(none)
true
Dropped 1 from repo1
Commit 1 not found in repo1
2 at 2024-03-01 at 12:00:02 +0000: third
0 at 2024-03-01 at 12:00:00 +0000: first
repo2 - No commits
"
        );
    }

    #[test]
    fn test_run_script_stops_at_first_failure() {
        let (mut session, buffer) = session();
        let script = "init repo1\nlog repo1 0\ninit repo2\n";

        let err = session.run_script(script.as_bytes()).unwrap_err();

        assert!(format!("{:#}", err).contains("line 2: log repo1 0"));
        assert!(format!("{:#}", err).contains("history length must be positive"));
        assert_eq!(buffer.contents(), "Initialized history repo1\n");
    }

    #[rstest]
    #[case("commit nowhere hello", "Unknown history: nowhere")]
    #[case("init repo1", "History already exists: repo1")]
    #[case("sync repo1 repo1", "Cannot synchronize history repo1 with itself")]
    #[case("sync repo1 nowhere", "Unknown history: nowhere")]
    #[case("sync nowhere repo1", "Unknown history: nowhere")]
    #[case("log repo1 0", "invalid argument: history length must be positive")]
    fn test_execute_line_failures(#[case] line: &str, #[case] expected: &str) {
        let (mut session, _) = session();
        session.execute_line(1, "init repo1").unwrap();

        let err = session.execute_line(2, line).unwrap_err();

        assert!(
            format!("{:#}", err).contains(expected),
            "{:#} does not mention {}",
            err,
            expected
        );
        assert!(session.history("repo1").is_ok());
    }

    #[test]
    fn test_log_of_empty_history_prints_nothing() {
        let (mut session, buffer) = session();
        session.execute_line(1, "init repo1").unwrap();
        session.execute_line(2, "log repo1").unwrap();

        assert_eq!(buffer.contents(), "Initialized history repo1\n");
    }
}
