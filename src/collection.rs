//! Todo Collection
//!
//! Ordered task list with the mutations the UI funnels through. Order is
//! user-meaningful and is what gets persisted after every change.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grouping;
use crate::models::Task;

/// Ordered sequence of tasks. Display order is derived from it by date
/// grouping; reorder indices refer to that flattened display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoCollection {
    tasks: Vec<Task>,
}

impl TodoCollection {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task with a fresh id. Whitespace-only titles are
    /// rejected; empty dates normalize to unscheduled. Returns whether a
    /// task was added.
    pub fn add(&mut self, title: &str, date: Option<String>) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        self.tasks.push(Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            completed: false,
            date: date.filter(|d| !d.is_empty()),
        });
        true
    }

    /// Flip the completed flag of the task with `id`; unknown ids are a
    /// no-op.
    pub fn toggle(&mut self, id: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.completed = !task.completed;
        }
    }

    /// Remove the task with `id`; unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) {
        self.tasks.retain(|task| task.id != id);
    }

    /// Remove every task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Move the task at flattened display index `from` to index `to`,
    /// shifting the tasks between them. The spliced display order becomes
    /// the new collection order. Self-moves and out-of-bounds indices are
    /// no-ops. The moved task keeps its date even when it crosses a group
    /// boundary; see DESIGN.md.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.tasks.len() || to >= self.tasks.len() {
            return;
        }
        let mut flat = grouping::flattened(&self.tasks);
        let task = flat.remove(from);
        flat.insert(to, task);
        self.tasks = flat;
    }

    /// Current flattened display index of the task with `id`.
    pub fn flattened_index_of(&self, id: &str) -> Option<usize> {
        grouping::flattened(&self.tasks)
            .iter()
            .position(|task| task.id == id)
    }
}
