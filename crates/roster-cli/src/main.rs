//! roster CLI — interactive student record manager.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use roster_core::{load_config_from, RecordStore};

mod commands;
mod console;
mod menu;
mod render;
mod session;

use console::Console;

#[derive(Parser)]
#[command(name = "roster", version, about = "Interactive student record manager")]
struct Cli {
    /// Config file path (TOML). No file is read unless this is given.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refuse to add a record whose ID is already present
    #[arg(long)]
    reject_duplicate_ids: bool,

    /// Refuse scores outside 0-100
    #[arg(long)]
    enforce_score_range: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roster=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config_from(cli.config.as_deref())?;
    config.reject_duplicate_ids |= cli.reject_duplicate_ids;
    config.enforce_score_range |= cli.enforce_score_range;

    let mut store = RecordStore::with_policy(config.insert_policy());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    session::run(&mut console, &mut store)
}
