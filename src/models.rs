//! Frontend Models
//!
//! Data structures matching the remote todo records.

use serde::{Deserialize, Serialize};

/// Todo record (matches remote)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Ids outside `u32` fail decoding of the whole response
    pub id: u32,
    pub todo: String,
    #[serde(default)]
    pub completed: bool,
    /// Owner reported by the remote, never rendered
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
}

impl Todo {
    /// A freshly created, not yet completed todo
    pub fn new(id: u32, todo: impl Into<String>) -> Self {
        Self {
            id,
            todo: todo.into(),
            completed: false,
            user_id: None,
        }
    }
}

/// Payload of the edit intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTodo {
    pub id: u32,
    #[serde(rename = "updatedTodo")]
    pub updated_todo: String,
}

/// List endpoint response: either the paged envelope or a bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TodoListResponse {
    Page { todos: Vec<Todo> },
    Bare(Vec<Todo>),
}

impl TodoListResponse {
    pub fn into_todos(self) -> Vec<Todo> {
        match self {
            TodoListResponse::Page { todos } => todos,
            TodoListResponse::Bare(todos) => todos,
        }
    }
}
