//! Ports the core consumes from the presentation layer.
//!
//! Removing a task needs an explicit yes from the user, and a rejected add has
//! to be shown to them. Both are expressed as traits so the screen state can be
//! driven by a terminal UI, a test double, or anything else.

use crate::store::DuplicateTitle;
use crate::task::TaskId;

/// Question put to the user before a task is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveRequest {
    pub id: TaskId,
    pub title: String,
}

impl RemoveRequest {
    pub const HEADING: &'static str = "Remove item";
    pub const QUESTION: &'static str = "Are you sure you want to remove this item?";
}

/// Binary user decision, asked before a destructive action.
pub trait Confirm {
    /// Return `true` only on an explicit affirmative answer.
    fn confirm(&mut self, request: &RemoveRequest) -> bool;
}

/// An answer that was already collected, e.g. from a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Yes,
    No,
}

impl Confirm for Decision {
    fn confirm(&mut self, _request: &RemoveRequest) -> bool {
        *self == Decision::Yes
    }
}

/// Blocking message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub heading: String,
    pub body: String,
}

impl From<&DuplicateTitle> for Notice {
    fn from(_err: &DuplicateTitle) -> Self {
        Notice {
            heading: "Task already exists".to_string(),
            body: "You cannot add a task with the same name".to_string(),
        }
    }
}

/// Sink for notices the user must acknowledge.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
