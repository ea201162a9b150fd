//! Todo Commands
//!
//! Frontend bindings for the remote todo endpoints.

use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::models::{Todo, TodoListResponse};
use super::{check_status, parse_json, send, Endpoint};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTodoArgs<'a> {
    pub todo: &'a str,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

#[derive(Serialize)]
struct UpdateTodoArgs<'a> {
    todo: &'a str,
}

fn encode<T: Serialize>(args: &T) -> ApiResult<String> {
    serde_json::to_string(args).map_err(|e| ApiError::Encode(e.to_string()))
}

fn todo_path(id: u32) -> String {
    format!("todos/{}", id)
}

// ========================
// Commands
// ========================

pub async fn list_todos(endpoint: &Endpoint) -> ApiResult<Vec<Todo>> {
    let response = send(endpoint, "GET", "todos", None).await?;
    parse_json::<TodoListResponse>(&response, None).map(TodoListResponse::into_todos)
}

/// Create a todo. The remote's copy (possibly with its own id) is returned.
pub async fn create_todo(endpoint: &Endpoint, todo: &Todo) -> ApiResult<Todo> {
    let body = encode(&CreateTodoArgs {
        todo: &todo.todo,
        completed: todo.completed,
        user_id: endpoint.user_id,
    })?;
    let response = send(endpoint, "POST", "todos/add", Some(body)).await?;
    parse_json(&response, None)
}

pub async fn update_todo(endpoint: &Endpoint, id: u32, text: &str) -> ApiResult<Todo> {
    let body = encode(&UpdateTodoArgs { todo: text })?;
    let response = send(endpoint, "PUT", &todo_path(id), Some(body)).await?;
    parse_json(&response, Some(id))
}

/// Delete a todo. Any response body is ignored.
pub async fn delete_todo(endpoint: &Endpoint, id: u32) -> ApiResult<()> {
    let response = send(endpoint, "DELETE", &todo_path(id), None).await?;
    check_status(&response, Some(id))
}
