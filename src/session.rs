//! Per-item edit mode lifecycle.
//!
//! An `EditSession` belongs to one displayed task. It decides when that task's
//! title is editable and holds the unsaved draft while it is. Transitions
//! consume the session and hand back its successor together with a [`Focus`]
//! signal for the presentation layer. The session itself never touches an
//! input device.

use log::debug;

use crate::store::{IdSource, TaskStore};
use crate::task::{TaskId, TaskList};

/// Whether a session is showing the committed title or editing a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Viewing,
    Editing { draft: String },
}

/// Focus change the presentation layer should apply after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Give input focus to the item's editable field.
    Acquire,
    /// Take input focus away from the item's editable field.
    Release,
    Unchanged,
}

/// Edit state of a single task item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    task_id: TaskId,
    mode: EditMode,
}

/// Result of committing a session: the next session, the list after the
/// store applied the new title, and the focus signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    pub session: EditSession,
    pub tasks: TaskList,
    pub focus: Focus,
}

impl EditSession {
    /// A viewing session for `task_id`.
    pub fn new(task_id: TaskId) -> Self {
        EditSession {
            task_id,
            mode: EditMode::Viewing,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }

    /// The unsaved title, if editing.
    pub fn draft(&self) -> Option<&str> {
        match &self.mode {
            EditMode::Editing { draft } => Some(draft),
            EditMode::Viewing => None,
        }
    }

    /// Text to display for the item: the draft while editing, otherwise the
    /// committed title.
    pub fn display_title<'a>(&'a self, committed: &'a str) -> &'a str {
        self.draft().unwrap_or(committed)
    }

    /// The delete affordance is disabled while the item is being edited.
    pub fn allows_remove(&self) -> bool {
        !self.is_editing()
    }

    /// Enter edit mode with the draft seeded from `committed_title`.
    pub fn begin_edit(self, committed_title: &str) -> (EditSession, Focus) {
        match self.mode {
            EditMode::Viewing => {
                debug!("event=edit_begin module=session id={}", self.task_id);
                (
                    EditSession {
                        task_id: self.task_id,
                        mode: EditMode::Editing {
                            draft: committed_title.to_string(),
                        },
                    },
                    Focus::Acquire,
                )
            }
            EditMode::Editing { .. } => (self, Focus::Unchanged),
        }
    }

    /// Replace the draft text. Ignored unless editing.
    pub fn update_draft(self, text: impl Into<String>) -> EditSession {
        match self.mode {
            EditMode::Editing { .. } => EditSession {
                task_id: self.task_id,
                mode: EditMode::Editing { draft: text.into() },
            },
            EditMode::Viewing => self,
        }
    }

    /// Leave edit mode and discard the draft.
    pub fn cancel(self) -> (EditSession, Focus) {
        match self.mode {
            EditMode::Editing { .. } => {
                debug!("event=edit_cancel module=session id={}", self.task_id);
                (EditSession::new(self.task_id), Focus::Release)
            }
            EditMode::Viewing => (self, Focus::Unchanged),
        }
    }

    /// Hand the draft to [`TaskStore::edit_title`] and leave edit mode.
    ///
    /// While viewing this is a no-op and `tasks` comes back unchanged.
    pub fn commit<I: IdSource>(self, store: &TaskStore<I>, tasks: &TaskList) -> Committed {
        match self.mode {
            EditMode::Editing { draft } => {
                debug!(
                    "event=edit_commit module=session id={} draft_len={}",
                    self.task_id,
                    draft.chars().count()
                );
                Committed {
                    tasks: store.edit_title(tasks, self.task_id, draft),
                    session: EditSession::new(self.task_id),
                    focus: Focus::Release,
                }
            }
            EditMode::Viewing => Committed {
                session: self,
                tasks: tasks.clone(),
                focus: Focus::Unchanged,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SequentialIds;

    fn one_task(title: &str) -> (TaskStore<SequentialIds>, TaskList, TaskId) {
        let mut store = TaskStore::with_ids(SequentialIds::new());
        let added = store.add(&TaskList::new(), title).expect("first add succeeds");
        (store, added.tasks, added.id)
    }

    #[test]
    fn test_new_session_is_viewing() {
        let session = EditSession::new(TaskId::new(1));
        assert_eq!(session.mode(), &EditMode::Viewing);
        assert!(session.allows_remove());
        assert_eq!(session.display_title("title"), "title");
    }

    #[test]
    fn test_begin_edit_seeds_draft_and_acquires_focus() {
        let (session, focus) = EditSession::new(TaskId::new(1)).begin_edit("Buy milk");
        assert_eq!(focus, Focus::Acquire);
        assert_eq!(session.draft(), Some("Buy milk"));
        assert!(!session.allows_remove());
    }

    #[test]
    fn test_begin_edit_twice_keeps_draft() {
        let (session, _) = EditSession::new(TaskId::new(1)).begin_edit("a");
        let session = session.update_draft("ab");
        let (session, focus) = session.begin_edit("a");
        assert_eq!(focus, Focus::Unchanged);
        assert_eq!(session.draft(), Some("ab"));
    }

    #[test]
    fn test_update_draft_ignored_while_viewing() {
        let session = EditSession::new(TaskId::new(1)).update_draft("typed");
        assert_eq!(session.draft(), None);
    }

    #[test]
    fn test_cancel_discards_draft_and_releases_focus() {
        let (session, _) = EditSession::new(TaskId::new(1)).begin_edit("old");
        let session = session.update_draft("new");
        assert_eq!(session.display_title("old"), "new");
        let (session, focus) = session.cancel();
        assert_eq!(focus, Focus::Release);
        assert_eq!(session.display_title("old"), "old");
        assert!(!session.is_editing());
    }

    #[test]
    fn test_cancel_while_viewing_is_noop() {
        let (session, focus) = EditSession::new(TaskId::new(1)).cancel();
        assert_eq!(focus, Focus::Unchanged);
        assert_eq!(session, EditSession::new(TaskId::new(1)));
    }

    #[test]
    fn test_commit_applies_draft_through_store() {
        let (store, tasks, id) = one_task("Buy milk");
        let (session, _) = EditSession::new(id).begin_edit("Buy milk");
        let committed = session.update_draft("Buy oat milk").commit(&store, &tasks);
        assert_eq!(committed.focus, Focus::Release);
        assert!(!committed.session.is_editing());
        assert_eq!(
            committed.tasks.get(id).map(|t| t.title.as_str()),
            Some("Buy oat milk")
        );
    }

    #[test]
    fn test_commit_while_viewing_leaves_tasks_alone() {
        let (store, tasks, id) = one_task("a");
        let committed = EditSession::new(id).commit(&store, &tasks);
        assert_eq!(committed.focus, Focus::Unchanged);
        assert_eq!(committed.tasks, tasks);
    }

    #[test]
    fn test_commit_for_removed_task_still_returns_to_viewing() {
        let (store, tasks, id) = one_task("a");
        let (session, _) = EditSession::new(id).begin_edit("a");
        let emptied = store.remove(&tasks, id);
        let committed = session.commit(&store, &emptied);
        assert!(committed.tasks.is_empty());
        assert_eq!(committed.session.mode(), &EditMode::Viewing);
        assert_eq!(committed.focus, Focus::Release);
    }

    #[test]
    fn test_sessions_are_independent() {
        let (a, _) = EditSession::new(TaskId::new(1)).begin_edit("a");
        let (b, _) = EditSession::new(TaskId::new(2)).begin_edit("b");
        let (a, _) = a.cancel();
        assert!(!a.is_editing());
        assert_eq!(b.draft(), Some("b"));
    }
}
