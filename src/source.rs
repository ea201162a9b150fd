//! Remote Data Source
//!
//! Abstract interface the store talks to, plus the HTTP implementation and
//! an in-memory one for offline use and tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::commands::{self, Endpoint};
use crate::config::{AppConfig, SourceKind};
use crate::error::{ApiError, ApiResult};
use crate::models::Todo;

/// CRUD access to the remote todo list.
///
/// Futures are not `Send`: they run on the browser event loop.
#[async_trait(?Send)]
pub trait TodoSource: Send + Sync {
    /// List all todos in remote order
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// Create a todo, returning the remote's copy
    async fn create(&self, todo: &Todo) -> ApiResult<Todo>;

    /// Replace a todo's text
    async fn update(&self, id: u32, text: &str) -> ApiResult<Todo>;

    /// Delete a todo by ID
    async fn delete(&self, id: u32) -> ApiResult<()>;
}

/// Build the source selected by config
pub fn from_config(config: &AppConfig) -> Box<dyn TodoSource> {
    match config.source {
        SourceKind::Http => Box::new(HttpTodoSource::new(Endpoint::new(
            &config.api_base_url,
            config.user_id,
            config.request_timeout_ms,
        ))),
        SourceKind::Memory => Box::new(MemoryTodoSource::seeded()),
    }
}

// ========================
// HTTP
// ========================

pub struct HttpTodoSource {
    endpoint: Endpoint,
}

impl HttpTodoSource {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait(?Send)]
impl TodoSource for HttpTodoSource {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        commands::list_todos(&self.endpoint).await
    }

    async fn create(&self, todo: &Todo) -> ApiResult<Todo> {
        commands::create_todo(&self.endpoint, todo).await
    }

    async fn update(&self, id: u32, text: &str) -> ApiResult<Todo> {
        commands::update_todo(&self.endpoint, id, text).await
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        commands::delete_todo(&self.endpoint, id).await
    }
}

// ========================
// In-memory
// ========================

/// In-memory remote. Assigns its own ids (highest + 1) on create.
#[derive(Default)]
pub struct MemoryTodoSource {
    todos: Mutex<Vec<Todo>>,
    /// When set, every call fails with this error
    failure: Mutex<Option<ApiError>>,
}

impl MemoryTodoSource {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
            failure: Mutex::new(None),
        }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            Todo::new(1, "Read the docs"),
            Todo::new(2, "Write the first todo"),
            Todo::new(3, "Ship it"),
        ])
    }

    /// Make every following call fail with `error`
    pub fn fail_with(&self, error: ApiError) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(error);
        }
    }

    pub fn snapshot(&self) -> Vec<Todo> {
        self.todos.lock().map(|todos| todos.clone()).unwrap_or_default()
    }

    fn check(&self) -> ApiResult<()> {
        match self.failure.lock() {
            Ok(failure) => failure.clone().map_or(Ok(()), Err),
            Err(_) => Err(ApiError::Network("memory source poisoned".to_string())),
        }
    }

    fn with_todos<T>(&self, f: impl FnOnce(&mut Vec<Todo>) -> ApiResult<T>) -> ApiResult<T> {
        self.check()?;
        let mut todos = self
            .todos
            .lock()
            .map_err(|_| ApiError::Network("memory source poisoned".to_string()))?;
        f(&mut todos)
    }
}

#[async_trait(?Send)]
impl TodoSource for MemoryTodoSource {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        self.with_todos(|todos| Ok(todos.clone()))
    }

    async fn create(&self, todo: &Todo) -> ApiResult<Todo> {
        self.with_todos(|todos| {
            let last = todos.iter().map(|t| t.id).max().unwrap_or(0);
            let id = last.checked_add(1).ok_or(ApiError::IdExhausted(last))?;
            let created = Todo { id, ..todo.clone() };
            todos.push(created.clone());
            Ok(created)
        })
    }

    async fn update(&self, id: u32, text: &str) -> ApiResult<Todo> {
        self.with_todos(|todos| {
            let todo = todos.iter_mut().find(|t| t.id == id).ok_or(ApiError::NotFound(id))?;
            todo.todo = text.to_string();
            Ok(todo.clone())
        })
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.with_todos(|todos| {
            let before = todos.len();
            todos.retain(|t| t.id != id);
            if todos.len() == before {
                return Err(ApiError::NotFound(id));
            }
            Ok(())
        })
    }
}
