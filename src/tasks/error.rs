//! Error types for task operations and storage

use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing the task file
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not read tasks from {}. {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not save tasks to {}. {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not encode tasks: {0}")]
    Encode(#[source] serde_json::Error),
}

/// User-facing errors raised by commands
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("'{command}' command requires a {argument}.\nExample: task-tracker {example}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
        example: &'static str,
    },

    #[error("Invalid task number '{0}'. Must be an integer.")]
    InvalidNumber(String),

    #[error("Task number {index} not found.\n{}", range_hint(.len))]
    OutOfRange { index: i64, len: usize },

    #[error("Cannot add an empty task.")]
    EmptyDescription,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn range_hint(len: &usize) -> String {
    if *len == 0 {
        "You have no tasks.".to_string()
    } else {
        format!("Valid task numbers are 1 to {len}.")
    }
}
