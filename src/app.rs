//! Todo UI App
//!
//! Builds the store, the remote data source and the view model from config
//! and hands them to the todo list explicitly.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoList;
use crate::config::AppConfig;
use crate::source::{self, TodoSource};
use crate::store::{StoreDispatcher, TodosState};
use crate::view_model::TodoView;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(TodosState::default());
    let source: Arc<dyn TodoSource> = Arc::from(source::from_config(&config));
    let dispatcher = StoreDispatcher::new(store, source, config.id_strategy);
    let view_model = RwSignal::new(TodoView::new(dispatcher, config.id_strategy));

    view! {
        <TodoList store=store view_model=view_model config=config />
    }
}
