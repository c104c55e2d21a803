//! Runtime configuration resolved from the command line and environment

use std::io::IsTerminal;
use std::path::PathBuf;

use crate::commands::utils::Style;
use crate::tasks::TaskStore;

/// Task file used when neither `--file` nor the environment names one
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Environment variable naming the task file
pub const TASKS_FILE_ENV: &str = "TASK_TRACKER_FILE";

/// Settings for a single invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON task file
    pub tasks_file: PathBuf,

    /// Emit debug logs on stderr
    pub verbose: bool,

    /// Colorize stdout
    pub color: bool,
}

impl Config {
    /// Build a config, defaulting the task file to `tasks.json` in the
    /// current directory
    pub fn new(tasks_file: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            tasks_file: tasks_file.unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE)),
            verbose,
            color: color_enabled(),
        }
    }

    /// Storage accessor for the configured task file
    pub fn store(&self) -> TaskStore {
        TaskStore::new(&self.tasks_file)
    }

    pub fn style(&self) -> Style {
        Style { color: self.color }
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Color only for an interactive stdout, and never when `NO_COLOR` is set
fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}
