//! New Todo Form Component
//!
//! Text input plus Add button. Enter submits.

use leptos::prelude::*;

use crate::store::{items_untracked, TodoStore};
use super::{apply_gesture, TodoViewModel};

#[component]
pub fn NewTodoForm(
    store: TodoStore,
    view_model: RwSignal<TodoViewModel>,
    toast_duration_ms: u32,
) -> impl IntoView {
    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let items = items_untracked(&store);
        apply_gesture(view_model, toast_duration_ms, |vm| vm.add(&items));
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <label class="new-todo-label" for="new-todo">"New Todo"</label>
            <input
                id="new-todo"
                type="text"
                class="new-todo-input"
                prop:value=move || view_model.with(|vm| vm.new_todo().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    view_model.update(|vm| vm.set_new_todo(text));
                }
            />
            <button type="submit" class="add-btn">"Add Todo"</button>
        </form>
    }
}
