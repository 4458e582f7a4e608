//! Task Model
//!
//! Data structure matching the persisted JSON shape.

use serde::{Deserialize, Serialize};

/// One TODO item. `date` may be absent (or empty in older stored data),
/// both meaning "unscheduled".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Task {
    /// The task's display group key: its date, or "No Date".
    pub fn date_key(&self) -> &str {
        self.date
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(crate::grouping::NO_DATE)
    }
}
