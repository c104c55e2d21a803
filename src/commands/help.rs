//! Help command - Show usage

use super::utils::{Style, BIN_NAME};

/// Full usage text
pub fn help_text(style: &Style) -> String {
    let rows = [
        ("list", "Show all tasks"),
        ("add \"<description>\"", "Add a new task"),
        ("complete <number>", "Mark a task as complete"),
        ("remove <number>", "Remove a task"),
        ("help", "Show this help message"),
    ];
    let width = rows.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);

    let mut lines = vec![style.heading("--- Task Tracker Help ---"), "Usage:".to_string()];
    for (usage, summary) in rows {
        lines.push(format!("  {BIN_NAME} {usage:<width$} : {summary}"));
    }

    lines.push(String::new());
    lines.push("Examples:".to_string());
    lines.push(format!("  {BIN_NAME} add \"Buy milk and eggs\""));
    lines.push(format!("  {BIN_NAME} complete 3"));

    lines.push(String::new());
    lines.push("Options (before the command):".to_string());
    lines.push("  -f, --file <PATH>  Task file (env: TASK_TRACKER_FILE, default: tasks.json)".to_string());
    lines.push("  -v, --verbose      Log storage activity to stderr".to_string());

    lines.join("\n")
}
