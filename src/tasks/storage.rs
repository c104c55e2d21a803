//! Task file storage
//!
//! Reads and writes the task list as a single JSON array. A missing file is an
//! empty list; a file that does not hold a JSON array is also treated as empty
//! and will be overwritten by the next save. Inside an array, entries that are
//! not objects are skipped and every other entry is kept.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::StorageError;
use super::model::{Task, TaskList};

/// Why a present task file was read as an empty list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// File exists but contains only whitespace
    Empty,
    /// Content is not valid JSON (or not valid UTF-8)
    InvalidJson(String),
    /// Valid JSON whose top-level value is not an array
    NotAnArray(&'static str),
}

impl std::fmt::Display for Recovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "file is empty"),
            Self::InvalidJson(reason) => write!(f, "invalid JSON: {}", reason),
            Self::NotAnArray(found) => write!(f, "expected an array, found {}", found),
        }
    }
}

/// Outcome of reading the task file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded {
    /// File decoded as a task list
    Tasks(TaskList),
    /// No file at the configured path
    Missing,
    /// File present but unusable; treated as an empty list
    Recovered(Recovery),
}

impl Loaded {
    /// Collapse the outcome into the list to operate on
    pub fn into_tasks(self) -> TaskList {
        match self {
            Self::Tasks(tasks) => tasks,
            Self::Missing | Self::Recovered(_) => TaskList::new(),
        }
    }
}

/// Reads and writes the task list at a fixed path
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the task file
    ///
    /// Only I/O failures other than "not found" are errors; unusable content
    /// comes back as [`Loaded::Recovered`].
    pub fn load(&self) -> Result<Loaded, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no task file, starting empty");
                return Ok(Loaded::Missing);
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                let recovery = Recovery::InvalidJson(e.to_string());
                Self::log_recovery(&self.path, &recovery);
                return Ok(Loaded::Recovered(recovery));
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let loaded = decode(&content);
        match &loaded {
            Loaded::Tasks(tasks) => {
                debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks")
            }
            Loaded::Recovered(recovery) => Self::log_recovery(&self.path, recovery),
            Loaded::Missing => {}
        }
        Ok(loaded)
    }

    /// Replace the task file with `tasks`
    ///
    /// Content is written to a sibling temp file and renamed into place, so a
    /// failed write leaves the previous file untouched. The temp file is
    /// removed on either failure.
    pub fn save(&self, tasks: &TaskList) -> Result<(), StorageError> {
        let content = encode(tasks)?;
        let tmp_path = tmp_path(&self.path);

        let written =
            fs::write(&tmp_path, &content).and_then(|_| fs::rename(&tmp_path, &self.path));
        if let Err(source) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(StorageError::Write {
                path: self.path.clone(),
                source,
            });
        }

        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    fn log_recovery(path: &Path, recovery: &Recovery) {
        debug!(
            path = %path.display(),
            reason = %recovery,
            "unusable task file, treating as empty"
        );
    }
}

fn decode(content: &str) -> Loaded {
    if content.trim().is_empty() {
        return Loaded::Recovered(Recovery::Empty);
    }

    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => return Loaded::Recovered(Recovery::InvalidJson(e.to_string())),
    };

    let entries = match value {
        Value::Array(entries) => entries,
        other => return Loaded::Recovered(Recovery::NotAnArray(json_kind(&other))),
    };

    let mut tasks = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Task>(entry) {
            Ok(task) => tasks.push(task),
            Err(e) => debug!(entry = i + 1, error = %e, "skipping unreadable task entry"),
        }
    }
    Loaded::Tasks(TaskList::from(tasks))
}

/// Pretty JSON with 4-space indentation and a trailing newline
fn encode(tasks: &TaskList) -> Result<Vec<u8>, StorageError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tasks
        .serialize(&mut serializer)
        .map_err(StorageError::Encode)?;
    buf.push(b'\n');
    Ok(buf)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
