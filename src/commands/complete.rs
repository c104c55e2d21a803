//! Complete command - Mark a task as complete

use crate::tasks::{parse_index, Completion, TaskError, TaskStore};

/// Mark the task at the given 1-based number complete
///
/// The number is validated before the task file is read. An already complete
/// task is reported without rewriting the file.
pub fn execute(store: &TaskStore, number: &str) -> Result<String, TaskError> {
    let index = parse_index(number)?;
    let mut tasks = store.load()?.into_tasks();

    let message = match tasks.complete(index)? {
        Completion::AlreadyComplete(_) => {
            return Ok(format!("Task {index} is already marked as complete."));
        }
        Completion::Completed(task) => {
            format!("Task {index} marked as complete: \"{}\"", task.description())
        }
    };

    store.save(&tasks)?;
    Ok(message)
}
