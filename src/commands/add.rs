//! Add command - Append a pending task

use tracing::debug;

use crate::tasks::{Task, TaskError, TaskStore};

/// Add a task and return the confirmation message
///
/// A blank description is rejected before the task file is touched.
pub fn execute(store: &TaskStore, description: &str) -> Result<String, TaskError> {
    let task = Task::pending(description)?;

    let mut tasks = store.load()?.into_tasks();
    let message = format!("Task added: \"{}\"", tasks.add(task).description());
    store.save(&tasks)?;

    debug!(count = tasks.len(), "task added");
    Ok(message)
}
