//! CLI commands and the dispatcher that routes a command word to them
//!
//! User-facing results and errors are returned as text for stdout. Only a
//! missing or unknown command word fails the process; every other error is
//! reported and exits successfully.

pub mod add;
pub mod complete;
pub mod help;
pub mod list;
pub mod remove;
pub mod utils;

use tracing::debug;

use crate::tasks::{StorageError, TaskError, TaskStore};
use utils::Style;

/// A parsed command line, borrowed from the raw arguments
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation<'a> {
    /// No command word at all
    Missing,
    /// Command word that matches nothing (lowercased)
    Unknown(String),
    List,
    Help,
    /// Remaining words, joined into the description when non-empty
    Add(&'a [String]),
    /// First remaining token, if any
    Complete(Option<&'a str>),
    Remove(Option<&'a str>),
}

impl<'a> Invocation<'a> {
    /// Match the command word case-insensitively; arguments are left as typed
    pub fn parse(args: &'a [String]) -> Self {
        let Some((word, rest)) = args.split_first() else {
            return Self::Missing;
        };
        let first = rest.first().map(String::as_str);

        match word.to_lowercase().as_str() {
            "list" => Self::List,
            "help" => Self::Help,
            "add" => Self::Add(rest),
            "complete" => Self::Complete(first),
            "remove" => Self::Remove(first),
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Process exit status for a dispatched command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    Failure,
}

/// What to print and how to exit
#[derive(Debug)]
pub struct Outcome {
    pub output: String,
    pub exit: Exit,
}

impl Outcome {
    fn success(output: String) -> Self {
        Self {
            output,
            exit: Exit::Success,
        }
    }

    fn failure(output: String) -> Self {
        Self {
            output,
            exit: Exit::Failure,
        }
    }
}

/// Run one command against the task store
///
/// Returns `Err` only when the task file exists but cannot be read.
pub fn dispatch(store: &TaskStore, args: &[String], style: &Style) -> anyhow::Result<Outcome> {
    let invocation = Invocation::parse(args);
    debug!(?invocation, path = %store.path().display(), "dispatching");

    let result = match invocation {
        Invocation::Missing => {
            return Ok(Outcome::failure(format!(
                "{} No command provided.\n{}",
                style.error_prefix(),
                help::help_text(style)
            )));
        }
        Invocation::Unknown(word) => {
            return Ok(Outcome::failure(format!(
                "{} Unknown command '{}'\n{}",
                style.error_prefix(),
                word,
                help::help_text(style)
            )));
        }
        Invocation::Help => Ok(help::help_text(style)),
        Invocation::List => list::execute(store, style),
        Invocation::Add([]) => Err(TaskError::MissingArgument {
            command: "add",
            argument: "task description",
            example: "add \"Buy groceries\"",
        }),
        Invocation::Add(words) => add::execute(store, &words.join(" ")),
        Invocation::Complete(Some(number)) => complete::execute(store, number),
        Invocation::Complete(None) => Err(TaskError::MissingArgument {
            command: "complete",
            argument: "task number",
            example: "complete 2",
        }),
        Invocation::Remove(Some(number)) => remove::execute(store, number),
        Invocation::Remove(None) => Err(TaskError::MissingArgument {
            command: "remove",
            argument: "task number",
            example: "remove 1",
        }),
    };

    match result {
        Ok(output) => Ok(Outcome::success(output)),
        Err(TaskError::Storage(e @ StorageError::Read { .. })) => Err(e.into()),
        Err(e) => Ok(Outcome::success(format!("{} {}", style.error_prefix(), e))),
    }
}
