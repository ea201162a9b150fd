//! Todo Row Component
//!
//! One list entry: either the read-only row with edit/delete actions, or the
//! inline editor for the todo being edited.

use leptos::prelude::*;

use crate::view_model::Row;
use super::{apply_gesture, TodoViewModel};

#[component]
pub fn TodoRow(
    row: Row,
    view_model: RwSignal<TodoViewModel>,
    toast_duration_ms: u32,
    allow_cancel_edit: bool,
) -> impl IntoView {
    match row {
        Row::Editing { .. } => {
            let save_edit = move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                apply_gesture(view_model, toast_duration_ms, |vm| vm.save_edit());
            };
            let editing_text = move || {
                view_model.with(|vm| vm.editing().map(|s| s.text.clone()).unwrap_or_default())
            };

            view! {
                <li class="todo-row editing">
                    <form class="edit-form" on:submit=save_edit>
                        <input
                            type="text"
                            class="edit-input"
                            autofocus=true
                            prop:value=editing_text
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                view_model.update(|vm| vm.set_editing_text(text));
                            }
                        />
                        <button type="submit" class="save-btn">"Save"</button>
                        {allow_cancel_edit.then(|| view! {
                            <button
                                type="button"
                                class="cancel-btn"
                                on:click=move |_| view_model.update(|vm| vm.cancel_edit())
                            >
                                "Cancel"
                            </button>
                        })}
                    </form>
                </li>
            }
            .into_any()
        }
        Row::Display { id, text } => {
            let edit_text = text.clone();

            view! {
                <li class="todo-row">
                    <span class="todo-id">{id}</span>
                    <span class="todo-text">{text}</span>
                    <button
                        class="edit-btn"
                        aria-label="edit"
                        on:click=move |_| view_model.update(|vm| vm.start_edit(id, &edit_text))
                    >
                        "✎"
                    </button>
                    <button
                        class="delete-btn"
                        aria-label="delete"
                        on:click=move |_| apply_gesture(view_model, toast_duration_ms, |vm| vm.delete(id))
                    >
                        "🗑"
                    </button>
                </li>
            }
            .into_any()
        }
    }
}
