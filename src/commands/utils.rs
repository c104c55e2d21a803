//! Shared output helpers for commands

use owo_colors::OwoColorize;

use crate::tasks::Status;

/// Name used in usage and example lines
pub const BIN_NAME: &str = "task-tracker";

/// Terminal styling for command output
///
/// Colors are only applied when enabled, so piped output stays plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    /// `Error:` prefix for user-facing errors
    pub fn error_prefix(&self) -> String {
        if self.color {
            "Error:".red().bold().to_string()
        } else {
            "Error:".to_string()
        }
    }

    /// Checkbox marker for a task status
    pub fn marker(&self, status: Status) -> String {
        match status {
            Status::Complete if self.color => status.marker().green().to_string(),
            _ => status.marker().to_string(),
        }
    }

    /// Section title in help output
    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}
