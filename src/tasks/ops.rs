//! In-memory task list operations
//!
//! Everything here is pure: callers load the list, apply an operation and
//! decide whether to persist the result.

use super::error::TaskError;
use super::model::{Task, TaskList};

/// Result of marking a task complete
#[derive(Debug, PartialEq, Eq)]
pub enum Completion<'a> {
    /// Status flipped from pending to complete
    Completed(&'a Task),
    /// Task was already complete; nothing changed
    AlreadyComplete(&'a Task),
}

/// Parse a 1-based task number as typed by the user
///
/// Surrounding whitespace and a leading sign are accepted. Range checking is
/// left to the list, so `0` and negative numbers parse successfully.
pub fn parse_index(text: &str) -> Result<i64, TaskError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| TaskError::InvalidNumber(text.to_string()))
}

impl TaskList {
    /// Append a task at the end of the list
    pub fn add(&mut self, task: Task) -> &Task {
        let tasks = self.tasks_mut();
        tasks.push(task);
        &tasks[tasks.len() - 1]
    }

    /// Tasks paired with their 1-based display index
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.iter().enumerate().map(|(i, task)| (i + 1, task))
    }

    /// Task at a 1-based display index
    pub fn get(&self, index: i64) -> Result<&Task, TaskError> {
        let position = self.position(index)?;
        Ok(&self.as_slice()[position])
    }

    /// Mark the task at `index` complete
    pub fn complete(&mut self, index: i64) -> Result<Completion<'_>, TaskError> {
        let position = self.position(index)?;
        let task = &mut self.tasks_mut()[position];
        let was_pending = !task.is_complete();
        task.mark_complete();
        let task = &*task;
        Ok(if was_pending {
            Completion::Completed(task)
        } else {
            Completion::AlreadyComplete(task)
        })
    }

    /// Remove the task at `index`; later tasks move up one position
    pub fn remove(&mut self, index: i64) -> Result<Task, TaskError> {
        let position = self.position(index)?;
        Ok(self.tasks_mut().remove(position))
    }

    /// Convert a display index into a position, checking `1..=len`
    fn position(&self, index: i64) -> Result<usize, TaskError> {
        let len = self.len();
        usize::try_from(index)
            .ok()
            .filter(|&i| (1..=len).contains(&i))
            .map(|i| i - 1)
            .ok_or(TaskError::OutOfRange { index, len })
    }
}
