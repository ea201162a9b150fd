//! Todo List Component
//!
//! Top-level view: progress indicator while loading, the error alone when
//! the initial fetch failed, otherwise the add form and the rows newest
//! first, plus the success snackbar.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::store::{track_state, TodoStore};
use crate::view_model::{Row, Screen};
use super::{LogPanel, NewTodoForm, Snackbar, TodoRow, TodoViewModel};

/// Which of the three layouts is shown
#[derive(Clone, Debug, PartialEq)]
enum Layout {
    Loading,
    Error(String),
    List,
}

/// `(id, editing, text, occurrence)`
type RowKey = (u32, bool, String, usize);

/// Editing rows are keyed without their live text so the input survives typing
fn row_key(row: &Row) -> (u32, bool, String) {
    match row {
        Row::Display { id, text } => (*id, false, text.clone()),
        Row::Editing { id, .. } => (*id, true, String::new()),
    }
}

/// Pair each row with a unique key; identical rows are told apart by the
/// order in which they appear
fn keyed_rows(rows: Vec<Row>) -> Vec<(RowKey, Row)> {
    let mut seen: HashMap<(u32, bool, String), usize> = HashMap::new();
    rows.into_iter()
        .map(|row| {
            let (id, editing, text) = row_key(&row);
            let occurrence = seen.entry((id, editing, text.clone())).or_default();
            let key = (id, editing, text, *occurrence);
            *occurrence += 1;
            (key, row)
        })
        .collect()
}

#[component]
pub fn TodoList(
    store: TodoStore,
    view_model: RwSignal<TodoViewModel>,
    config: AppConfig,
) -> impl IntoView {
    let toast_duration_ms = config.toast_duration_ms;
    let allow_cancel_edit = config.allow_cancel_edit;
    let show_log_panel = config.show_log_panel;

    // Fetch once on mount
    Effect::new(move |_| {
        tracing::info!("todo list mounted");
        view_model.update(|vm| vm.mount());
    });

    let screen = Memo::new(move |_| {
        let state = track_state(&store);
        view_model.with(|vm| vm.render(&state))
    });

    let layout = Memo::new(move |_| match screen.get() {
        Screen::Loading => Layout::Loading,
        Screen::Error(message) => Layout::Error(message),
        Screen::List { .. } => Layout::List,
    });

    let rows = move || match screen.get() {
        Screen::List { rows } => keyed_rows(rows),
        Screen::Loading | Screen::Error(_) => Vec::new(),
    };

    view! {
        {move || match layout.get() {
            Layout::Loading => view! {
                <div class="loading">
                    <div class="spinner" role="progressbar"></div>
                </div>
            }
            .into_any(),
            Layout::Error(message) => view! {
                <p class="error">"Error: " {message}</p>
            }
            .into_any(),
            Layout::List => view! {
                <main class="todo-container">
                    <section class="todo-paper">
                        <h1>"Todo App"</h1>

                        <NewTodoForm
                            store=store
                            view_model=view_model
                            toast_duration_ms=toast_duration_ms
                        />

                        <hr class="divider" />

                        <ul class="todo-list">
                            <For
                                each=rows
                                key=|entry: &(RowKey, Row)| entry.0.clone()
                                children=move |(_, row)| view! {
                                    <TodoRow
                                        row=row
                                        view_model=view_model
                                        toast_duration_ms=toast_duration_ms
                                        allow_cancel_edit=allow_cancel_edit
                                    />
                                }
                            />
                        </ul>
                    </section>
                </main>
            }
            .into_any(),
        }}

        <Snackbar view_model=view_model />

        {show_log_panel.then(|| view! { <LogPanel /> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_key_ignores_text() {
        let a = Row::Editing { id: 1, text: "a".to_string() };
        let b = Row::Editing { id: 1, text: "ab".to_string() };
        assert_eq!(row_key(&a), row_key(&b));
    }

    #[test]
    fn test_display_key_tracks_text() {
        let before = Row::Display { id: 1, text: "a".to_string() };
        let after = Row::Display { id: 1, text: "b".to_string() };
        assert_ne!(row_key(&before), row_key(&after));
        assert_ne!(row_key(&before), row_key(&Row::Editing { id: 1, text: "a".to_string() }));
    }

    #[test]
    fn test_duplicate_rows_get_distinct_keys() {
        let dup = Row::Display { id: 4, text: "same".to_string() };
        let keyed = keyed_rows(vec![dup.clone(), Row::Display { id: 5, text: "other".to_string() }, dup]);

        assert_eq!(keyed[0].0, (4, false, "same".to_string(), 0));
        assert_eq!(keyed[1].0, (5, false, "other".to_string(), 0));
        assert_eq!(keyed[2].0, (4, false, "same".to_string(), 1));
    }
}
