//! Task data structures.
//!
//! This module defines the `Task` entity and the `TaskList` snapshot that the
//! store transitions between. A `TaskList` is an immutable value: every
//! operation on it yields a new list, sharing the allocations of the tasks it
//! did not touch.

use std::fmt;
use std::rc::Rc;

/// Identifier of a task, unique within a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Wrap a raw identifier value.
    pub const fn new(raw: u64) -> Self {
        TaskId(raw)
    }

    /// The raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single checklist item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

impl Task {
    /// Create a task that has not been completed yet.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            done: false,
        }
    }
}

/// Ordered snapshot of tasks in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Rc<Task>>,
}

impl TaskList {
    /// Create an empty list.
    pub fn new() -> Self {
        TaskList::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().map(|t| t.as_ref())
    }

    /// Get a task by ID.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.iter().find(|t| t.id == id)
    }

    /// Get the task at a display position.
    pub fn at(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index).map(|t| t.as_ref())
    }

    /// Position of a task in display order.
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    /// Find a task whose title matches exactly (case-sensitive).
    pub fn find_by_title(&self, title: &str) -> Option<&Task> {
        self.iter().find(|t| t.title == title)
    }

    /// Whether `other` holds the very same allocation for `id` as this list.
    ///
    /// Transitions only reallocate the task they change, so this tells callers
    /// which rows need re-rendering.
    pub fn shares_task(&self, other: &TaskList, id: TaskId) -> bool {
        let mine = self.tasks.iter().find(|t| t.id == id);
        let theirs = other.tasks.iter().find(|t| t.id == id);
        match (mine, theirs) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Return a new list with `task` appended.
    pub(crate) fn with_appended(&self, task: Task) -> TaskList {
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.extend(self.tasks.iter().cloned());
        tasks.push(Rc::new(task));
        TaskList { tasks }
    }

    /// Return a new list where the task with `id` is replaced by `change(task)`.
    ///
    /// Returns `None` when no task has that id.
    pub(crate) fn with_updated<F>(&self, id: TaskId, change: F) -> Option<TaskList>
    where
        F: FnOnce(&Task) -> Task,
    {
        let idx = self.position(id)?;
        let mut tasks = self.tasks.clone();
        tasks[idx] = Rc::new(change(&self.tasks[idx]));
        Some(TaskList { tasks })
    }

    /// Return a new list without the task with `id`.
    ///
    /// Returns `None` when no task has that id.
    pub(crate) fn without(&self, id: TaskId) -> Option<TaskList> {
        self.position(id)?;
        let tasks = self
            .tasks
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        Some(TaskList { tasks })
    }
}

/// Format the header counter ("1 task", "3 tasks").
pub fn format_counter(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{count} tasks")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(titles: &[&str]) -> TaskList {
        titles
            .iter()
            .enumerate()
            .fold(TaskList::new(), |list, (i, title)| {
                list.with_appended(Task::new(TaskId::new(i as u64 + 1), *title))
            })
    }

    #[test]
    fn test_appended_tasks_keep_insertion_order() {
        let list = list_of(&["a", "b", "c"]);
        let titles: Vec<&str> = list.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert!(list.iter().all(|t| !t.done));
    }

    #[test]
    fn test_updated_shares_untouched_tasks() {
        let list = list_of(&["a", "b"]);
        let next = list
            .with_updated(TaskId::new(1), |t| Task {
                done: true,
                ..t.clone()
            })
            .expect("task 1 exists");
        assert!(!list.shares_task(&next, TaskId::new(1)));
        assert!(list.shares_task(&next, TaskId::new(2)));
        assert!(next.get(TaskId::new(1)).map(|t| t.done).unwrap_or(false));
    }

    #[test]
    fn test_missing_ids_yield_none() {
        let list = list_of(&["a"]);
        assert!(list.without(TaskId::new(9)).is_none());
        assert!(list.with_updated(TaskId::new(9), Task::clone).is_none());
    }

    #[test]
    fn test_find_by_title_is_case_sensitive() {
        let list = list_of(&["Milk"]);
        assert!(list.find_by_title("Milk").is_some());
        assert!(list.find_by_title("milk").is_none());
    }

    #[test]
    fn test_format_counter() {
        assert_eq!(format_counter(0), "0 tasks");
        assert_eq!(format_counter(1), "1 task");
        assert_eq!(format_counter(2), "2 tasks");
    }
}
