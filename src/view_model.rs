//! Todo View Model
//!
//! Transient UI state of the todo list (input text, edit session, toast)
//! and the translation of user gestures into store intents. The store is
//! reached only through the injected [`TodoIntents`].

use crate::config::IdStrategy;
use crate::models::{EditTodo, Todo};
use crate::store::TodosState;
use crate::toast::ToastState;

pub const TODO_ADDED: &str = "Todo added successfully!";
pub const TODO_DELETED: &str = "Todo deleted successfully!";
pub const TODO_UPDATED: &str = "Todo updated successfully!";

/// Fire-and-forget intents the view dispatches to the store
pub trait TodoIntents {
    fn fetch_all(&self);
    fn add(&self, todo: Todo);
    fn edit(&self, edit: EditTodo);
    fn delete(&self, id: u32);
}

/// Id for a todo about to be created from `items` (store order)
pub fn next_id(items: &[Todo], strategy: IdStrategy) -> u32 {
    let base = match strategy {
        IdStrategy::LastPlusOne | IdStrategy::ServerAssigned => items.last().map(|t| t.id),
        IdStrategy::MaxPlusOne => items.iter().map(|t| t.id).max(),
    };
    base.map_or(1, |id| id.saturating_add(1))
}

/// Item currently in edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: u32,
    pub text: String,
}

/// One list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Display { id: u32, text: String },
    Editing { id: u32, text: String },
}

impl Row {
    pub fn id(&self) -> u32 {
        match self {
            Row::Display { id, .. } | Row::Editing { id, .. } => *id,
        }
    }
}

/// What the view shows for a given store state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Progress indicator only
    Loading,
    /// Error message only
    Error(String),
    /// Add form plus rows, newest first
    List { rows: Vec<Row> },
}

pub struct TodoView<D> {
    intents: D,
    id_strategy: IdStrategy,
    mounted: bool,
    new_todo: String,
    editing: Option<EditSession>,
    toast: ToastState,
}

impl<D: TodoIntents> TodoView<D> {
    pub fn new(intents: D, id_strategy: IdStrategy) -> Self {
        Self {
            intents,
            id_strategy,
            mounted: false,
            new_todo: String::new(),
            editing: None,
            toast: ToastState::default(),
        }
    }

    /// Dispatch the initial fetch. Only the first call has an effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.intents.fetch_all();
    }

    pub fn new_todo(&self) -> &str {
        &self.new_todo
    }

    pub fn set_new_todo(&mut self, text: String) {
        self.new_todo = text;
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn set_editing_text(&mut self, text: String) {
        if let Some(session) = self.editing.as_mut() {
            session.text = text;
        }
    }

    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    pub fn take_toast_timer(&mut self) -> Option<u64> {
        self.toast.take_pending_timer()
    }

    pub fn expire_toast(&mut self, generation: u64) {
        self.toast.expire(generation);
    }

    pub fn dismiss_toast(&mut self) {
        self.toast.dismiss();
    }

    pub fn arm_toast_click_away(&mut self, generation: u64) {
        self.toast.arm_click_away(generation);
    }

    pub fn click_away_toast(&mut self) {
        self.toast.click_away();
    }

    /// Add the input text as a new todo. Blank input is ignored.
    pub fn add(&mut self, items: &[Todo]) {
        if self.new_todo.trim().is_empty() {
            return;
        }
        let id = next_id(items, self.id_strategy);
        let text = std::mem::take(&mut self.new_todo);
        self.intents.add(Todo::new(id, text));
        self.toast.show(TODO_ADDED);
    }

    /// No existence check: the id is dispatched as given.
    pub fn delete(&mut self, id: u32) {
        self.intents.delete(id);
        self.toast.show(TODO_DELETED);
    }

    /// Enter edit mode, dropping any edit already in progress
    pub fn start_edit(&mut self, id: u32, text: &str) {
        self.editing = Some(EditSession {
            id,
            text: text.to_string(),
        });
    }

    /// Save the edit session. Blank text is ignored and keeps edit mode.
    pub fn save_edit(&mut self) {
        let Some(session) = self.editing.as_ref() else { return };
        if session.text.trim().is_empty() {
            return;
        }
        if let Some(session) = self.editing.take() {
            self.intents.edit(EditTodo {
                id: session.id,
                updated_todo: session.text,
            });
            self.toast.show(TODO_UPDATED);
        }
    }

    /// Leave edit mode without dispatching
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn render(&self, state: &TodosState) -> Screen {
        if state.loading {
            return Screen::Loading;
        }
        if let Some(error) = &state.error {
            return Screen::Error(error.clone());
        }

        let rows = state
            .items
            .iter()
            .rev()
            .map(|todo| match &self.editing {
                Some(session) if session.id == todo.id => Row::Editing {
                    id: todo.id,
                    text: session.text.clone(),
                },
                _ => Row::Display {
                    id: todo.id,
                    text: todo.todo.clone(),
                },
            })
            .collect();
        Screen::List { rows }
    }
}
