use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use notebook_config::AppConfig;
use notebook_core::NoteBook;

mod command;
mod session;

use session::{Flow, Session};

/// An in-memory notebook with undo and redo.
#[derive(Parser, Debug)]
#[command(name = "notebook", version, about)]
struct Cli {
    /// Path to the JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read commands from a file instead of standard input.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_or_create(&config_path);

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting notebook with config {}", config_path.display());

    let notebook = NoteBook::with_sort_condition(config.sort_condition());
    let mut session = Session::new(notebook, config.history_config());

    let (reader, interactive): (Box<dyn BufRead>, bool) = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            (Box::new(BufReader::new(file)), false)
        }
        None => (Box::new(io::stdin().lock()), io::stdin().is_terminal()),
    };

    run(&mut session, reader, interactive)?;
    tracing::info!(
        "Session ended with {} undo steps recorded",
        session.history().undo_depth()
    );
    Ok(())
}

/// Reads lines until end of input or `exit`, printing each command's output.
fn run(session: &mut Session, reader: Box<dyn BufRead>, interactive: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    prompt(&mut stdout, interactive)?;

    for line in reader.lines() {
        let line = line.context("Failed to read command")?;
        match session.handle_line(&line) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue(Some(output))) => writeln!(stdout, "{output}")?,
            Ok(Flow::Continue(None)) => {}
            Err(e) => {
                tracing::debug!("Command '{}' failed: {e:#}", line.trim());
                writeln!(stdout, "Error: {e}")?;
            }
        }
        prompt(&mut stdout, interactive)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write, interactive: bool) -> Result<()> {
    if interactive {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
