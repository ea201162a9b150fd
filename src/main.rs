//! Todo UI Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod error;
mod models;
mod source;
mod store;
mod toast;
mod view_model;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

const APP_NAME: &str = "TodoUi";

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::from_build_env(), Some(e)),
    };

    if let Err(e) = rolling_logger::init_logger(APP_NAME, config.log_capacity) {
        web_sys::console::error_1(&format!("failed to init logger: {}", e).into());
    }
    if let Some(e) = config_error {
        rolling_logger::warn(&format!("ignoring stored config override: {}", e));
    }
    tracing::info!(source = ?config.source, id_strategy = ?config.id_strategy, "starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
