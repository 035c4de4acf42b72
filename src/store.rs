// Centralized in-memory state: the task collection plus the display filter

use tracing::debug;

use crate::filter::{self, Filter};
use crate::models::Task;

/// Single owner of application state.
///
/// Holds the ordered task collection (insertion order is display order) and
/// the current display filter. Created once at application start and kept
/// for the process lifetime; there is no persistence behind it.
pub struct Store {
    tasks: Vec<Task>,
    filter: String,
}

impl Store {
    /// Create an empty store showing all tasks
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            filter: Filter::All.as_str().to_string(),
        }
    }

    /// Replace the entire task collection.
    ///
    /// The sequence is taken as given; id uniqueness is the caller's
    /// responsibility.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        debug!(count = tasks.len(), "set_tasks: replacing collection");
        self.tasks = tasks;
    }

    /// Append a task, preserving insertion order.
    ///
    /// No duplicate-id check is performed; if the caller passes an id that
    /// is already present, both entries persist.
    pub fn add_task(&mut self, task: Task) {
        debug!(id = %task.id, "add_task");
        self.tasks.push(task);
    }

    /// Set the completion flag on the first task with a matching id.
    /// Silently does nothing when no task matches.
    pub fn update_task_status(&mut self, id: &str, completed: bool) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            debug!(id, completed, "update_task_status");
            task.completed = completed;
        } else {
            debug!(id, "update_task_status: no matching task");
        }
    }

    /// Rename the first task with a matching id. Silently does nothing when
    /// no task matches.
    pub fn update_task_title(&mut self, id: &str, title: String) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            debug!(id, "update_task_title");
            task.title = title;
        } else {
            debug!(id, "update_task_title: no matching task");
        }
    }

    /// Remove every task with a matching id, keeping the relative order of
    /// the remaining tasks.
    pub fn delete_task(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        debug!(id, removed = before - self.tasks.len(), "delete_task");
    }

    /// Overwrite the current filter.
    ///
    /// Any string is accepted; unrecognized values make `filtered_tasks`
    /// fall back to the full list.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        debug!(filter = %self.filter, "set_filter");
    }

    /// The full collection, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The raw filter value, exactly as last set
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The tasks visible under the current filter, recomputed on demand
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        filter::visible(&self.filter, &self.tasks)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
