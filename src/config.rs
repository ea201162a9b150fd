//! App Configuration
//!
//! Defaults, overridden by the `TODO_API_BASE_URL` build-time variable and
//! then by a JSON object stored in `localStorage["todo-ui.config"]`.
//! An invalid override is rejected as a whole.

use serde::{Deserialize, Serialize};

/// localStorage key holding the JSON config override
pub const CONFIG_STORAGE_KEY: &str = "todo-ui.config";

pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 6000;

/// How the view picks the id of a new todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Last item's id + 1, or 1 for an empty list
    #[default]
    LastPlusOne,
    /// Highest id in the list + 1, or 1 for an empty list
    MaxPlusOne,
    /// Store keeps the id returned by the remote
    ServerAssigned,
}

/// Which remote data source backs the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Http,
    /// Seeded in-memory list, no network
    Memory,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub source: SourceKind,
    pub user_id: u32,
    pub toast_duration_ms: u32,
    /// No timeout when absent
    pub request_timeout_ms: Option<u32>,
    pub id_strategy: IdStrategy,
    pub allow_cancel_edit: bool,
    pub log_capacity: usize,
    /// Show the in-page panel with recent log lines
    pub show_log_panel: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            source: SourceKind::Http,
            user_id: 1,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            request_timeout_ms: None,
            id_strategy: IdStrategy::LastPlusOne,
            allow_cancel_edit: false,
            log_capacity: 500,
            show_log_panel: false,
        }
    }
}

impl AppConfig {
    /// Defaults plus the build-time base URL override
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("TODO_API_BASE_URL") {
            config.api_base_url = url.to_string();
        }
        config
    }

    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()
    }

    fn validate(mut self) -> Result<Self, ConfigError> {
        if self.source == SourceKind::Http && self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base_url must not be empty".to_string()));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid("request_timeout_ms must be positive".to_string()));
        }
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Load the effective config for the running page.
    ///
    /// Without a stored override this is the build-time config. An override
    /// that fails to parse or validate is reported to the caller.
    pub fn load() -> Result<Self, ConfigError> {
        let base = Self::from_build_env();
        let Some(raw) = read_stored_override() else {
            return Ok(base);
        };

        // Fields absent from the override keep the build-time values
        let mut merged = serde_json::to_value(base)?;
        merge_json(&mut merged, serde_json::from_str(&raw)?);
        Self::from_json(&merged.to_string())
    }
}

/// Overlay top-level keys of `patch` onto `base`
fn merge_json(base: &mut serde_json::Value, patch: serde_json::Value) {
    match (base, patch) {
        (serde_json::Value::Object(base), serde_json::Value::Object(patch)) => {
            for (key, value) in patch {
                base.insert(key, value);
            }
        }
        (base, patch) => *base = patch,
    }
}

fn read_stored_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(CONFIG_STORAGE_KEY).ok()?
}
