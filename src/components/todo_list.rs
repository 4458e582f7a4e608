//! Todo List Component
//!
//! Header row with Clear All, then the tasks grouped under their date
//! headings. Rows are rendered in flattened display order so gesture
//! indices line up with what is on screen.

use leptos::prelude::*;
use leptos_reorder::ReorderSignals;

use crate::grouping::group_by_date;
use crate::store::{store_clear_todos, store_flattened_index, use_app_store, AppStateStoreFields};
use crate::components::TodoRow;

/// The grouped task list
#[component]
pub fn TodoList(reorder: ReorderSignals) -> impl IntoView {
    let store = use_app_store();

    let resolve = Callback::new(move |id: String| store_flattened_index(&store, &id));

    view! {
        <div class="list-form">
            <div class="list-header">
                <h1 class="header">"Todo List"</h1>
                <button class="btn btn-clearall" on:click=move |_| store_clear_todos(&store)>
                    "Clear All"
                </button>
            </div>
            <ul class="list">
                {move || {
                    let todos = store.todos().get();
                    if todos.is_empty() {
                        return view! { <li class="empty">"No Todos"</li> }.into_any();
                    }
                    let mut offset = 0;
                    group_by_date(todos.tasks())
                        .into_iter()
                        .map(|(date, tasks)| {
                            let start = offset;
                            offset += tasks.len();
                            view! {
                                <div class="date-group">
                                    <p class="date">{date}</p>
                                    {tasks
                                        .into_iter()
                                        .enumerate()
                                        .map(|(k, task)| view! {
                                            <TodoRow
                                                task=task
                                                flat_index=start + k
                                                reorder=reorder
                                                resolve=resolve
                                            />
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </ul>
        </div>
    }
}
