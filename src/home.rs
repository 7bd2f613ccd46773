//! Screen state for the checklist.
//!
//! `Home` is the state container owned by the top-level screen. It holds the
//! current `TaskList` snapshot and the edit session of every item, and turns
//! user intents into store transitions. Rendering code reads from it and feeds
//! intents back in; it never mutates tasks directly.

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::prompt::{Confirm, Notice, Notifier, RemoveRequest};
use crate::session::{EditSession, Focus};
use crate::store::{AddError, ClockIds, IdSource, TaskStore};
use crate::task::{TaskId, TaskList};

/// What happened to an add intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(TaskId),
    /// The title was already taken; the user has been notified.
    Duplicate,
    /// Nothing but whitespace was entered; the store was not called.
    Blank,
    /// The id source has nothing left to hand out.
    Exhausted,
}

/// What happened to a remove intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Declined,
    /// The item is being edited, so its delete affordance is disabled.
    Blocked,
    Missing,
}

/// Task list plus per-item edit sessions.
#[derive(Debug)]
pub struct Home<I: IdSource = ClockIds> {
    store: TaskStore<I>,
    tasks: TaskList,
    sessions: HashMap<TaskId, EditSession>,
}

impl Home<ClockIds> {
    /// Empty screen whose task ids come from the system clock.
    pub fn new() -> Self {
        Self::with_store(TaskStore::new())
    }
}

impl Default for Home<ClockIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> Home<I> {
    pub fn with_store(store: TaskStore<I>) -> Self {
        Home {
            store,
            tasks: TaskList::new(),
            sessions: HashMap::new(),
        }
    }

    /// Current snapshot.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Edit session of an item. Items without one are viewing.
    pub fn session(&self, id: TaskId) -> EditSession {
        self.sessions
            .get(&id)
            .cloned()
            .unwrap_or_else(|| EditSession::new(id))
    }

    /// Ids of the items currently in edit mode, in display order.
    pub fn editing(&self) -> Vec<TaskId> {
        self.tasks
            .iter()
            .map(|t| t.id)
            .filter(|id| self.sessions.contains_key(id))
            .collect()
    }

    /// Add a task, notifying the user when the title is already taken.
    pub fn add(&mut self, title: &str, notifier: &mut impl Notifier) -> AddOutcome {
        if title.trim().is_empty() {
            debug!("event=task_add module=home status=rejected reason=blank");
            return AddOutcome::Blank;
        }
        match self.store.add(&self.tasks, title) {
            Ok(added) => {
                self.tasks = added.tasks;
                AddOutcome::Added(added.id)
            }
            Err(AddError::Duplicate(err)) => {
                notifier.notify(Notice::from(&err));
                AddOutcome::Duplicate
            }
            Err(AddError::IdsExhausted) => {
                warn!("event=task_add module=home status=rejected reason=ids_exhausted");
                AddOutcome::Exhausted
            }
        }
    }

    pub fn toggle_done(&mut self, id: TaskId) {
        self.tasks = self.store.toggle_done(&self.tasks, id);
    }

    /// Remove a task once the user confirms.
    ///
    /// The user is not asked when the task no longer exists or is being
    /// edited. Declining leaves the list untouched.
    pub fn remove(&mut self, id: TaskId, confirm: &mut impl Confirm) -> RemoveOutcome {
        let Some(task) = self.tasks.get(id) else {
            return RemoveOutcome::Missing;
        };
        if !self.session(id).allows_remove() {
            debug!("event=task_remove module=home status=blocked id={}", id);
            return RemoveOutcome::Blocked;
        }
        let request = RemoveRequest {
            id,
            title: task.title.clone(),
        };
        if !confirm.confirm(&request) {
            info!("event=task_remove module=home status=declined id={}", id);
            return RemoveOutcome::Declined;
        }
        self.tasks = self.store.remove(&self.tasks, id);
        self.sessions.remove(&id);
        RemoveOutcome::Removed
    }

    /// Put an item into edit mode. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: TaskId) -> Focus {
        let Some(task) = self.tasks.get(id) else {
            return Focus::Unchanged;
        };
        let (session, focus) = self.session(id).begin_edit(&task.title);
        self.put_session(session);
        focus
    }

    /// Replace an editing item's draft.
    pub fn update_draft(&mut self, id: TaskId, text: impl Into<String>) {
        if let Some(session) = self.sessions.remove(&id) {
            self.put_session(session.update_draft(text));
        }
    }

    pub fn cancel_edit(&mut self, id: TaskId) -> Focus {
        let (session, focus) = self.session(id).cancel();
        self.put_session(session);
        focus
    }

    /// Write an item's draft to the list and leave edit mode.
    ///
    /// A whitespace-only draft is not committed: the item stays in edit mode
    /// and `Focus::Unchanged` is returned.
    pub fn commit_edit(&mut self, id: TaskId) -> Focus {
        let session = self.session(id);
        if session.draft().is_some_and(|draft| draft.trim().is_empty()) {
            debug!("event=edit_commit module=home status=rejected reason=blank id={}", id);
            return Focus::Unchanged;
        }
        let committed = session.commit(&self.store, &self.tasks);
        self.tasks = committed.tasks;
        self.put_session(committed.session);
        committed.focus
    }

    fn put_session(&mut self, session: EditSession) {
        if session.is_editing() {
            self.sessions.insert(session.task_id(), session);
        } else {
            self.sessions.remove(&session.task_id());
        }
    }
}
