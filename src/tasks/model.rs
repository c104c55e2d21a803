//! Task data types and their on-disk representation
//!
//! A task file is a JSON array of objects with `description` and `status`
//! fields, in that order:
//!
//! ```json
//! [
//!     {
//!         "description": "Buy milk",
//!         "status": "pending"
//!     }
//! ]
//! ```
//!
//! Reading is lenient: a missing description reads as `No description`, and
//! a missing or unrecognized status reads as pending.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::TaskError;

/// Completion state of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Complete,
}

impl Status {
    /// Checkbox marker shown in listings
    pub fn marker(self) -> &'static str {
        match self {
            Self::Pending => "[ ]",
            Self::Complete => "[x]",
        }
    }
}

/// A single tracked item
///
/// The description is fixed at creation; only the status changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default = "missing_description")]
    description: String,
    #[serde(default, deserialize_with = "lenient_status")]
    status: Status,
}

fn missing_description() -> String {
    "No description".to_string()
}

/// Only `"complete"` counts as complete; anything else is pending
fn lenient_status<'de, D>(deserializer: D) -> Result<Status, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value.as_str() {
        Some("complete") => Status::Complete,
        _ => Status::Pending,
    })
}

impl Task {
    /// Create a pending task, rejecting blank descriptions
    pub fn pending(description: impl Into<String>) -> Result<Self, TaskError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        Ok(Self {
            description,
            status: Status::Pending,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }

    pub(crate) fn mark_complete(&mut self) {
        self.status = Status::Complete;
    }
}

/// Ordered sequence of tasks; position + 1 is the display index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.0
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.0
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
