//! Remove command - Delete a task

use crate::tasks::{parse_index, TaskError, TaskStore};

/// Remove the task at the given 1-based number
pub fn execute(store: &TaskStore, number: &str) -> Result<String, TaskError> {
    let index = parse_index(number)?;
    let mut tasks = store.load()?.into_tasks();

    let removed = tasks.remove(index)?;
    store.save(&tasks)?;

    Ok(format!(
        "Task {index} removed: \"{}\"",
        removed.description()
    ))
}
