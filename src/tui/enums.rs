//! Enumerations for TUI state management.

use crate::prompt::{Notice, RemoveRequest};

/// Which part of the screen receives key presses.
#[derive(Clone, Debug, PartialEq)]
pub enum AppState {
    /// Browsing the list.
    TaskList,
    /// Typing into the new-task input.
    NewTask,
    /// Typing into the draft of the selected item.
    EditTitle,
    /// Waiting for a yes/no before removing a task.
    Confirm(RemoveRequest),
    /// Blocking message; any key dismisses it.
    Notice(Notice),
    Help,
}
