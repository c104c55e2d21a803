//! task-tracker library
//!
//! Keeps a small ordered list of tasks in a JSON file on local disk and
//! exposes the add / list / complete / remove commands used by the CLI.

pub mod commands;
pub mod config;
pub mod tasks;
