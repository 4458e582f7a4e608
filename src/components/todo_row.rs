//! Todo Row Component
//!
//! One draggable list row: checkbox, title, delete button. `data-id`
//! carries the task id for touch hit-testing.

use leptos::prelude::*;
use leptos_reorder::{
    dragging_index, make_on_drag_end, make_on_drag_over, make_on_drag_start, make_on_touch_end,
    make_on_touch_move, make_on_touch_start, ReorderSignals,
};

use crate::models::Task;
use crate::store::{store_delete_todo, store_toggle_todo, use_app_store};

/// A single task row at flattened display index `flat_index`
#[component]
pub fn TodoRow(
    task: Task,
    flat_index: usize,
    reorder: ReorderSignals,
    /// Maps a `data-id` value to its current flattened index
    resolve: Callback<String, Option<usize>>,
) -> impl IntoView {
    let store = use_app_store();

    let id = task.id.clone();
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();

    let row_class = move || {
        if dragging_index(&reorder) == Some(flat_index) {
            "task-row dragging"
        } else {
            "task-row"
        }
    };

    view! {
        <li
            class=row_class
            draggable="true"
            data-id=id
            on:dragstart=make_on_drag_start(reorder, flat_index)
            on:dragover=make_on_drag_over(reorder, flat_index)
            on:dragend=make_on_drag_end(reorder)
            on:touchstart=make_on_touch_start(reorder, flat_index)
            on:touchmove=make_on_touch_move(reorder, resolve)
            on:touchend=make_on_touch_end(reorder)
        >
            <label>
                <input
                    type="checkbox"
                    prop:checked=task.completed
                    on:change=move |_| store_toggle_todo(&store, &toggle_id)
                />
                <span class="task-title">{task.title.clone()}</span>
            </label>
            <button
                class="btn btn-danger"
                on:click=move |_| store_delete_todo(&store, &delete_id)
            >
                "×"
            </button>
        </li>
    }
}
