//! Simple TODO(s) App
//!
//! Root component: owns the store, the reorder controller, and the
//! write-through persistence effects.

use leptos::prelude::*;
use leptos_reorder::{create_reorder_signals, ReorderSignals};

use crate::components::{NewItemForm, ThemeSelector, TodoList};
use crate::storage;
use crate::store::{store_reorder_todos, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(AppState::load());
    provide_context(store);

    // Write-through: every task mutation overwrites the stored value.
    Effect::new(move |_| {
        storage::save_tasks(&store.todos().read());
    });

    // Persist and apply the theme on change (and once on startup).
    Effect::new(move |_| {
        let theme = store.theme().get();
        storage::save_theme(theme);
        theme.apply_to_body();
    });

    let reorder: ReorderSignals = create_reorder_signals(Callback::new(
        move |(from, to): (usize, usize)| {
            store_reorder_todos(&store, from, to);
        },
    ));

    view! {
        <div class="page-header">
            <h1>"Simple TODO" <span class="header-suffix">"(s)"</span></h1>
        </div>
        <ThemeSelector />
        <div class="content">
            <NewItemForm />
            <TodoList reorder=reorder />
        </div>
    }
}
