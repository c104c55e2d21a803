//! List command - Show all tasks with their display index

use crate::tasks::{TaskError, TaskList, TaskStore};

use super::utils::Style;

/// Shown instead of a listing when there are no tasks
pub const EMPTY_HINT: &str = "No tasks found. Add one with the 'add' command!";

/// Load the task file and format it for display
pub fn execute(store: &TaskStore, style: &Style) -> Result<String, TaskError> {
    let tasks = store.load()?.into_tasks();
    Ok(format_list(&tasks, style))
}

/// One `N. [ ] description` line per task
pub fn format_list(tasks: &TaskList, style: &Style) -> String {
    if tasks.is_empty() {
        return EMPTY_HINT.to_string();
    }

    tasks
        .entries()
        .map(|(index, task)| {
            format!(
                "{}. {} {}",
                index,
                style.marker(task.status()),
                task.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
