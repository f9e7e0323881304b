use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use minigit::{ProcessIds, Session, Stamper, SteppingClock};
use std::io::{BufReader, Write};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal commit log",
    long_about = "This is a minimal commit log, written in Rust. \
    Histories live in memory for the duration of a run and are driven by a script \
    of commands such as init, commit, log, drop and sync.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "run",
        about = "Run a history script",
        long_about = "This command executes a history script one line at a time. \
        Use - to read the script from standard input."
    )]
    Run {
        #[arg(index = 1, help = "Path to the script, or - for stdin")]
        script: String,
    },
    #[command(
        name = "exec",
        about = "Run script lines given as arguments",
        long_about = "This command executes each argument as one line of a history script."
    )]
    Exec {
        #[arg(index = 1, required = true, help = "Script lines, e.g. \"init repo1\"")]
        lines: Vec<String>,
    },
}

fn stamper_from_env() -> Result<Stamper> {
    match SteppingClock::load_from_env()? {
        Some(clock) => Ok(Stamper::new(Arc::new(clock), Arc::new(ProcessIds))),
        None => Ok(Stamper::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut session = Session::new(Box::new(std::io::stdout()), stamper_from_env()?);

    match &cli.command {
        Commands::Run { script } => {
            if script == "-" {
                session.run_script(std::io::stdin().lock())?
            } else {
                let file = std::fs::File::open(script)
                    .with_context(|| format!("Failed to open script {}", script))?;
                session.run_script(BufReader::new(file))?
            }
        }
        Commands::Exec { lines } => {
            for (index, line) in lines.iter().enumerate() {
                session.execute_line(index + 1, line)?;
            }
        }
    }

    session.writer().flush()?;

    Ok(())
}
