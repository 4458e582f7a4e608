//! Date Grouping
//!
//! Pure projection of the task list into date groups for display. Keys
//! appear in first-appearance order (not calendar order); relative order
//! within each group follows the collection. Never mutates the list —
//! reordering goes through `TodoCollection`, not through here.

use indexmap::IndexMap;

use crate::models::Task;

/// Group key for tasks without a date.
pub const NO_DATE: &str = "No Date";

/// One stable pass grouping tasks by their date key.
pub fn group_by_date(tasks: &[Task]) -> IndexMap<String, Vec<Task>> {
    let mut groups: IndexMap<String, Vec<Task>> = IndexMap::new();
    for task in tasks {
        groups
            .entry(task.date_key().to_string())
            .or_default()
            .push(task.clone());
    }
    groups
}

/// The flattened display order: all groups concatenated in key order.
pub fn flattened(tasks: &[Task]) -> Vec<Task> {
    group_by_date(tasks).into_values().flatten().collect()
}
