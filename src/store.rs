//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All task and
//! theme mutations funnel through the `store_*` helpers here; rendering
//! code only reads.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collection::TodoCollection;
use crate::storage;
use crate::theme::Theme;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The ordered task list
    pub todos: TodoCollection,
    /// Active visual theme
    pub theme: Theme,
}

impl AppState {
    /// Initial state from local storage; empty defaults when nothing
    /// usable is stored.
    pub fn load() -> Self {
        Self {
            todos: storage::load_tasks(),
            theme: storage::load_theme(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a task; returns false when the title is blank.
pub fn store_add_todo(store: &AppStore, title: &str, date: Option<String>) -> bool {
    store.todos().write().add(title, date)
}

/// Flip a task's completed flag by id
pub fn store_toggle_todo(store: &AppStore, id: &str) {
    store.todos().write().toggle(id);
}

/// Remove a task from the store by id
pub fn store_delete_todo(store: &AppStore, id: &str) {
    store.todos().write().delete(id);
}

/// Remove every task
pub fn store_clear_todos(store: &AppStore) {
    store.todos().write().clear();
}

/// Move a task between flattened display indices
pub fn store_reorder_todos(store: &AppStore, from: usize, to: usize) {
    store.todos().write().reorder(from, to);
}

/// Switch the visual theme
pub fn store_set_theme(store: &AppStore, theme: Theme) {
    store.theme().set(theme);
}

/// Current flattened display index of the task with `id`, untracked
/// (used from gesture handlers, not from rendering).
pub fn store_flattened_index(store: &AppStore, id: &str) -> Option<usize> {
    store.todos().read_untracked().flattened_index_of(id)
}
