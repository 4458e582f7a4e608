//! Theme Selector Component
//!
//! Dropdown over the named themes; exactly one is active.

use leptos::prelude::*;

use crate::store::{store_set_theme, use_app_store, AppStateStoreFields};
use crate::theme::Theme;

/// Theme dropdown
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let store = use_app_store();

    view! {
        <select
            class="theme-select"
            on:change=move |ev| {
                store_set_theme(&store, Theme::parse_or_default(&event_target_value(&ev)));
            }
        >
            {Theme::ALL
                .into_iter()
                .map(|theme| view! {
                    <option
                        value=theme.as_str()
                        selected=move || store.theme().get() == theme
                    >
                        {theme.label()}
                    </option>
                })
                .collect_view()}
        </select>
    }
}
