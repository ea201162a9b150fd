//! Snackbar Component
//!
//! Success toast in the top-right corner with a close button. Clicking
//! anywhere outside it closes it too.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::TodoViewModel;

const SNACKBAR_SELECTOR: &str = ".snackbar";

/// Start the auto-hide timer if the last gesture opened the toast
pub fn arm_toast_timer(view_model: RwSignal<TodoViewModel>, duration_ms: u32) {
    let Some(generation) = view_model.try_update(|vm| vm.take_toast_timer()).flatten() else {
        return;
    };
    Timeout::new(duration_ms, move || {
        view_model.try_update(|vm| vm.expire_toast(generation));
    })
    .forget();

    // Outside clicks count only after the opening click has finished bubbling
    Timeout::new(0, move || {
        view_model.try_update(|vm| vm.arm_toast_click_away(generation));
    })
    .forget();
}

/// True when the event target sits inside the snackbar
fn inside_snackbar(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(SNACKBAR_SELECTOR).ok().flatten())
        .is_some()
}

/// Bind a document click handler that closes the toast on outside clicks
fn bind_click_away(view_model: RwSignal<TodoViewModel>) {
    use wasm_bindgen::closure::Closure;

    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if inside_snackbar(&ev) {
            return;
        }
        view_model.try_update(|vm| vm.click_away_toast());
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    }
    on_click.forget();
}

#[component]
pub fn Snackbar(view_model: RwSignal<TodoViewModel>) -> impl IntoView {
    bind_click_away(view_model);

    let is_open = move || view_model.with(|vm| vm.toast().is_open());
    let message = move || view_model.with(|vm| vm.toast().message().to_string());

    view! {
        <Show when=is_open>
            <div class="snackbar" role="alert">
                <span class="snackbar-icon">"✓"</span>
                <span class="snackbar-message">{message}</span>
                <button
                    class="snackbar-close"
                    aria-label="close"
                    on:click=move |_| view_model.update(|vm| vm.dismiss_toast())
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
