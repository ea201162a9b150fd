//! UI Components
//!
//! Leptos components for the todo list. The store and the view model are
//! passed down as props.

mod log_panel;
mod new_todo_form;
mod snackbar;
mod todo_list;
mod todo_row;

use leptos::prelude::*;

use crate::store::StoreDispatcher;
use crate::view_model::TodoView;

pub use log_panel::LogPanel;
pub use new_todo_form::NewTodoForm;
pub use snackbar::Snackbar;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;

/// View model driven by the real store
pub type TodoViewModel = TodoView<StoreDispatcher>;

/// Apply a gesture to the view model, then arm any toast timer it requested
pub fn apply_gesture(
    view_model: RwSignal<TodoViewModel>,
    toast_duration_ms: u32,
    gesture: impl FnOnce(&mut TodoViewModel),
) {
    view_model.update(gesture);
    snackbar::arm_toast_timer(view_model, toast_duration_ms);
}
