//! Todo State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. The async intent
//! functions talk to a [`TodoSource`] and apply the outcome to the store;
//! [`StoreDispatcher`] runs them fire-and-forget for the view.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::IdStrategy;
use crate::models::{EditTodo, Todo};
use crate::source::TodoSource;
use crate::view_model::TodoIntents;

/// Store state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodosState {
    /// Insertion/fetch order, oldest first
    pub items: Vec<Todo>,
    /// True only while fetch-all is in flight
    pub loading: bool,
    /// Fetch-all failure message, never cleared
    pub error: Option<String>,
}

/// Type alias for the store
pub type TodoStore = Store<TodosState>;

/// Read every field with tracking, so a reactive closure reruns on any change
pub fn track_state(store: &TodoStore) -> TodosState {
    TodosState {
        items: store.items().get(),
        loading: store.loading().get(),
        error: store.error().get(),
    }
}

pub fn items_untracked(store: &TodoStore) -> Vec<Todo> {
    store.items().get_untracked()
}

// ========================
// Store Helper Functions
// ========================

/// Append a todo to the store
pub fn store_add_todo(store: &TodoStore, todo: Todo) {
    store.items().write().push(todo);
}

/// Replace a todo's text by ID
pub fn store_update_todo_text(store: &TodoStore, id: u32, text: String) {
    if let Some(todo) = store.items().write().iter_mut().find(|todo| todo.id == id) {
        todo.todo = text;
    }
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &TodoStore, id: u32) {
    store.items().write().retain(|todo| todo.id != id);
}

// ========================
// Intents
// ========================

pub async fn fetch_todos(store: TodoStore, source: &dyn TodoSource) {
    *store.loading().write() = true;
    tracing::info!("fetching todos");

    match source.list().await {
        Ok(items) => {
            tracing::info!(count = items.len(), "loaded todos");
            *store.items().write() = items;
        }
        Err(e) => {
            tracing::error!("fetch todos failed: {}", e);
            *store.error().write() = Some(e.to_string());
        }
    }
    *store.loading().write() = false;
}

/// Create remotely, then append. With `ServerAssigned` the remote's record
/// (and its id) is kept, otherwise the dispatched payload.
pub async fn add_todo(store: TodoStore, source: &dyn TodoSource, todo: Todo, id_strategy: IdStrategy) {
    match source.create(&todo).await {
        Ok(created) => {
            let kept = match id_strategy {
                IdStrategy::ServerAssigned => created,
                IdStrategy::LastPlusOne | IdStrategy::MaxPlusOne => todo,
            };
            tracing::debug!(id = kept.id, "todo added");
            store_add_todo(&store, kept);
        }
        Err(e) => tracing::warn!("add todo {} failed: {}", todo.id, e),
    }
}

pub async fn edit_todo(store: TodoStore, source: &dyn TodoSource, edit: EditTodo) {
    match source.update(edit.id, &edit.updated_todo).await {
        Ok(_) => store_update_todo_text(&store, edit.id, edit.updated_todo),
        Err(e) => tracing::warn!("edit todo {} failed: {}", edit.id, e),
    }
}

pub async fn delete_todo(store: TodoStore, source: &dyn TodoSource, id: u32) {
    match source.delete(id).await {
        Ok(()) => store_remove_todo(&store, id),
        Err(e) => tracing::warn!("delete todo {} failed: {}", id, e),
    }
}

// ========================
// Dispatcher
// ========================

/// Runs each intent on the local executor without waiting for it
#[derive(Clone)]
pub struct StoreDispatcher {
    store: TodoStore,
    source: Arc<dyn TodoSource>,
    id_strategy: IdStrategy,
}

impl StoreDispatcher {
    pub fn new(store: TodoStore, source: Arc<dyn TodoSource>, id_strategy: IdStrategy) -> Self {
        Self {
            store,
            source,
            id_strategy,
        }
    }
}

impl TodoIntents for StoreDispatcher {
    fn fetch_all(&self) {
        let (store, source) = (self.store, self.source.clone());
        spawn_local(async move { fetch_todos(store, source.as_ref()).await });
    }

    fn add(&self, todo: Todo) {
        let (store, source, id_strategy) = (self.store, self.source.clone(), self.id_strategy);
        spawn_local(async move { add_todo(store, source.as_ref(), todo, id_strategy).await });
    }

    fn edit(&self, edit: EditTodo) {
        let (store, source) = (self.store, self.source.clone());
        spawn_local(async move { edit_todo(store, source.as_ref(), edit).await });
    }

    fn delete(&self, id: u32) {
        let (store, source) = (self.store, self.source.clone());
        spawn_local(async move { delete_todo(store, source.as_ref(), id).await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::{ApiError, ApiResult};
    use crate::source::MemoryTodoSource;

    /// Source that records the store's loading flag while `list` runs
    struct LoadingWatcher {
        store: TodoStore,
        seen: Mutex<Option<bool>>,
    }

    #[async_trait(?Send)]
    impl TodoSource for LoadingWatcher {
        async fn list(&self) -> ApiResult<Vec<Todo>> {
            *self.seen.lock().unwrap() = Some(self.store.loading().get_untracked());
            Ok(vec![Todo::new(1, "x")])
        }
        async fn create(&self, todo: &Todo) -> ApiResult<Todo> {
            Ok(todo.clone())
        }
        async fn update(&self, id: u32, text: &str) -> ApiResult<Todo> {
            Ok(Todo::new(id, text))
        }
        async fn delete(&self, _id: u32) -> ApiResult<()> {
            Ok(())
        }
    }

    fn store_with(items: Vec<Todo>) -> TodoStore {
        Store::new(TodosState { items, ..Default::default() })
    }

    fn xy() -> Vec<Todo> {
        vec![Todo::new(1, "x"), Todo::new(2, "y")]
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let store = store_with(vec![]);
        let source = MemoryTodoSource::new(xy());

        fetch_todos(store, &source).await;

        assert_eq!(items_untracked(&store), xy());
        assert!(!store.loading().get_untracked());
        assert_eq!(store.error().get_untracked(), None);
    }

    #[tokio::test]
    async fn test_fetch_sets_loading_while_in_flight() {
        let store = store_with(vec![]);
        let source = LoadingWatcher { store, seen: Mutex::new(None) };

        fetch_todos(store, &source).await;

        assert_eq!(*source.seen.lock().unwrap(), Some(true));
        assert!(!store.loading().get_untracked());
        assert_eq!(items_untracked(&store), vec![Todo::new(1, "x")]);
    }

    #[tokio::test]
    async fn test_fetch_failure_sets_error() {
        let store = store_with(vec![]);
        let source = MemoryTodoSource::new(xy());
        source.fail_with(ApiError::Network("network down".to_string()));

        fetch_todos(store, &source).await;

        assert!(items_untracked(&store).is_empty());
        assert!(!store.loading().get_untracked());
        assert_eq!(
            store.error().get_untracked(),
            Some("network request failed: network down".to_string())
        );
    }

    #[tokio::test]
    async fn test_add_keeps_client_id() {
        let store = store_with(xy());
        let source = MemoryTodoSource::new(vec![Todo::new(7, "remote only")]);

        add_todo(store, &source, Todo::new(3, "z"), IdStrategy::LastPlusOne).await;

        let items = items_untracked(&store);
        assert_eq!(items.last(), Some(&Todo::new(3, "z")));
    }

    #[tokio::test]
    async fn test_add_server_assigned_keeps_remote_id() {
        let store = store_with(xy());
        let source = MemoryTodoSource::new(vec![Todo::new(7, "remote only")]);

        add_todo(store, &source, Todo::new(3, "z"), IdStrategy::ServerAssigned).await;

        assert_eq!(items_untracked(&store).last().map(|t| t.id), Some(8));
    }

    #[tokio::test]
    async fn test_failed_add_leaves_store_unchanged() {
        let store = store_with(xy());
        let source = MemoryTodoSource::new(xy());
        source.fail_with(ApiError::Timeout(100));

        add_todo(store, &source, Todo::new(3, "z"), IdStrategy::LastPlusOne).await;

        assert_eq!(items_untracked(&store), xy());
        assert_eq!(store.error().get_untracked(), None);
    }

    #[tokio::test]
    async fn test_edit_replaces_text() {
        let store = store_with(xy());
        let source = MemoryTodoSource::new(xy());

        edit_todo(store, &source, EditTodo { id: 2, updated_todo: "y2".to_string() }).await;

        assert_eq!(items_untracked(&store)[1].todo, "y2");
        assert_eq!(source.snapshot()[1].todo, "y2");
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let store = store_with(xy());
        let source = MemoryTodoSource::new(xy());

        delete_todo(store, &source, 1).await;

        assert_eq!(items_untracked(&store), vec![Todo::new(2, "y")]);
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_store_unchanged() {
        let store = store_with(xy());
        let source = MemoryTodoSource::new(xy());

        delete_todo(store, &source, 42).await;

        assert_eq!(items_untracked(&store), xy());
    }

    #[test]
    fn test_store_helpers() {
        let store = store_with(xy());
        store_add_todo(&store, Todo::new(3, "z"));
        store_update_todo_text(&store, 3, "zz".to_string());
        store_remove_todo(&store, 1);

        let ids: Vec<u32> = items_untracked(&store).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(items_untracked(&store)[1].todo, "zz");
    }
}
