//! New Item Form Component
//!
//! Text input + due date input + Add button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_todo, use_app_store};

/// Form for adding a new task
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());
    let (new_date, set_new_date) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.trim().is_empty() {
            return;
        }
        let date = Some(new_date.get()).filter(|d| !d.is_empty());
        if store_add_todo(&store, &title, date) {
            set_new_title.set(String::new());
            set_new_date.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_todo>
            <div class="form-row">
                <label for="item">"New Item"</label>
                <input
                    id="item"
                    type="text"
                    prop:value=move || new_title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_title.set(input.value());
                    }
                />
            </div>
            <div class="form-row">
                <label for="date">"Due Date"</label>
                <input
                    id="date"
                    type="date"
                    prop:value=move || new_date.get()
                    on:input=move |ev| set_new_date.set(event_target_value(&ev))
                />
            </div>
            <button class="btn" type="submit">"Add"</button>
        </form>
    }
}
