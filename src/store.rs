//! Task store transitions.
//!
//! `TaskStore` turns one `TaskList` snapshot into the next. Every operation is
//! a pure transition: the input list is never modified, and expected business
//! conditions are reported as values rather than panics.
//!
//! Duplicate titles are rejected when a task is added. Editing a title does not
//! re-check uniqueness; callers rely on that asymmetry.

use chrono::Utc;
use log::{debug, info, warn};
use thiserror::Error;

use crate::task::{Task, TaskId, TaskList};

/// Rejection returned by [`TaskStore::add`] when the title is already taken.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("a task titled '{title}' already exists")]
pub struct DuplicateTitle {
    pub title: String,
    /// Id of the task already holding the title.
    pub existing: TaskId,
}

/// Reasons [`TaskStore::add`] can refuse a task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateTitle),
    /// The id source has already handed out `u64::MAX`.
    #[error("no task ids left to assign")]
    IdsExhausted,
}

/// Successful result of [`TaskStore::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub tasks: TaskList,
    pub id: TaskId,
}

/// Source of unique, totally ordered task identifiers.
pub trait IdSource {
    /// Mint an id strictly greater than any previously minted by this source.
    ///
    /// Returns `None` once the id space is exhausted.
    fn next_id(&mut self) -> Option<TaskId>;
}

/// Ids derived from wall-clock milliseconds.
///
/// When the clock has not advanced (or went backwards) since the previous id,
/// the previous id plus one is used instead, so ids never collide within a run.
/// After `u64::MAX` has been handed out the source is exhausted.
#[derive(Debug, Clone)]
pub struct ClockIds {
    now_millis: fn() -> i64,
    last: Option<u64>,
}

impl ClockIds {
    /// Ids based on the system clock.
    pub fn new() -> Self {
        Self::with_clock(|| Utc::now().timestamp_millis())
    }

    /// Ids based on a custom millisecond clock.
    pub fn with_clock(now_millis: fn() -> i64) -> Self {
        ClockIds {
            now_millis,
            last: None,
        }
    }
}

impl Default for ClockIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> Option<TaskId> {
        let now = u64::try_from((self.now_millis)()).unwrap_or(0);
        let raw = match self.last {
            Some(last) if now <= last => last.checked_add(1)?,
            _ => now,
        };
        self.last = Some(raw);
        Some(TaskId::new(raw))
    }
}

/// Plain counter starting at 1.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Option<TaskId> {
        self.last = self.last.checked_add(1)?;
        Some(TaskId::new(self.last))
    }
}

/// Validated transitions over `TaskList` snapshots.
#[derive(Debug, Clone, Default)]
pub struct TaskStore<I: IdSource = ClockIds> {
    ids: I,
}

impl TaskStore<ClockIds> {
    /// Create a store minting ids from the system clock.
    pub fn new() -> Self {
        Self::with_ids(ClockIds::new())
    }
}

impl<I: IdSource> TaskStore<I> {
    /// Create a store with a specific id source.
    pub fn with_ids(ids: I) -> Self {
        TaskStore { ids }
    }

    /// Append a new, not-done task titled `title`.
    ///
    /// The title is taken as-is: no trimming, and empty titles are accepted.
    /// Rejects with [`AddError::Duplicate`] when a task with exactly the same
    /// title exists, and with [`AddError::IdsExhausted`] when no id is left.
    /// Either way `tasks` is left as it was.
    pub fn add(&mut self, tasks: &TaskList, title: impl Into<String>) -> Result<Added, AddError> {
        let title = title.into();
        if let Some(existing) = tasks.find_by_title(&title) {
            info!(
                "event=task_add module=store status=rejected reason=duplicate_title existing_id={} title_len={}",
                existing.id,
                title.chars().count()
            );
            return Err(DuplicateTitle {
                title,
                existing: existing.id,
            }
            .into());
        }

        let Some(id) = self.ids.next_id() else {
            warn!(
                "event=task_add module=store status=rejected reason=ids_exhausted count={}",
                tasks.len()
            );
            return Err(AddError::IdsExhausted);
        };
        debug!(
            "event=task_add module=store status=ok id={} title_len={} count={}",
            id,
            title.chars().count(),
            tasks.len() + 1
        );
        Ok(Added {
            tasks: tasks.with_appended(Task::new(id, title)),
            id,
        })
    }

    /// Flip the completion flag of the task with `id`.
    ///
    /// Unknown ids leave the list unchanged.
    pub fn toggle_done(&self, tasks: &TaskList, id: TaskId) -> TaskList {
        match tasks.with_updated(id, |t| Task {
            done: !t.done,
            ..t.clone()
        }) {
            Some(next) => {
                debug!(
                    "event=task_toggle module=store status=ok id={} done={}",
                    id,
                    next.get(id).map(|t| t.done).unwrap_or_default()
                );
                next
            }
            None => {
                debug!("event=task_toggle module=store status=noop id={}", id);
                tasks.clone()
            }
        }
    }

    /// Drop the task with `id`, keeping the order of the rest.
    ///
    /// The caller is expected to have confirmed the removal with the user.
    /// Unknown ids leave the list unchanged.
    pub fn remove(&self, tasks: &TaskList, id: TaskId) -> TaskList {
        match tasks.without(id) {
            Some(next) => {
                debug!(
                    "event=task_remove module=store status=ok id={} count={}",
                    id,
                    next.len()
                );
                next
            }
            None => {
                debug!("event=task_remove module=store status=noop id={}", id);
                tasks.clone()
            }
        }
    }

    /// Replace the title of the task with `id`.
    ///
    /// Uniqueness is not re-validated here. Unknown ids leave the list
    /// unchanged.
    pub fn edit_title(&self, tasks: &TaskList, id: TaskId, new_title: impl Into<String>) -> TaskList {
        let new_title = new_title.into();
        let title_len = new_title.chars().count();
        match tasks.with_updated(id, move |t| Task {
            title: new_title,
            ..t.clone()
        }) {
            Some(next) => {
                debug!(
                    "event=task_edit module=store status=ok id={} title_len={}",
                    id, title_len
                );
                next
            }
            None => {
                debug!("event=task_edit module=store status=noop id={}", id);
                tasks.clone()
            }
        }
    }
}
