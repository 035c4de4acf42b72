use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use todostore::models::Task;
use todostore::repl::ReplSession;
use todostore::store::Store;

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "Interactive to-do list backed by an in-memory task store")]
#[command(version)]
struct Cli {
    /// JSON file with an initial task list (array of {id, title, completed})
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    // Log to stderr; stdout belongs to the shell
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut store = Store::new();

    if let Some(path) = &cli.seed {
        let raw =
            fs::read_to_string(path).with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let tasks: Vec<Task> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {} as a task list", path.display()))?;
        info!(count = tasks.len(), "Seeding store from file");
        store.set_tasks(tasks);
    }

    ReplSession::new(store).run()
}
