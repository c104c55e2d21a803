//! task-tracker: keep a small list of tasks in a local JSON file

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use task_tracker::commands::{self, Exit};
use task_tracker::config::{Config, TASKS_FILE_ENV};

#[derive(Parser)]
#[command(name = "task-tracker")]
#[command(about = "Track a small list of tasks in a local JSON file", long_about = None)]
#[command(version)]
#[command(after_help = "Commands: list, add <description...>, complete <number>, remove <number>, help")]
struct Cli {
    /// Task file to read and write (default: ./tasks.json)
    #[arg(short, long, value_name = "PATH", env = TASKS_FILE_ENV)]
    file: Option<PathBuf>,

    /// Log storage activity to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Command followed by its arguments
    ///
    /// Hyphenated words that are not known flags land here too, so the
    /// dispatcher reports them as unknown commands.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 1..
    )]
    args: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::new(cli.file, cli.verbose);
    init_logging(&config);

    let store = config.store();
    let outcome = commands::dispatch(&store, &cli.args, &config.style())
        .with_context(|| format!("Failed to load tasks from {}", store.path().display()))?;

    println!("{}", outcome.output);

    Ok(match outcome.exit {
        Exit::Success => ExitCode::SUCCESS,
        Exit::Failure => ExitCode::FAILURE,
    })
}

fn init_logging(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
