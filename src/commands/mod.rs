//! Remote Todo Bindings
//!
//! Frontend bindings to the remote todo endpoints over `window.fetch`.
//! Transport lives here; status and body parsing are plain functions.

mod todo;

use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, RequestMode, Response};

use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use todo::*;

/// Where and how to reach the remote todo list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: String,
    /// Owner id sent when creating todos
    pub user_id: u32,
    pub timeout_ms: Option<u32>,
}

impl Endpoint {
    pub fn new(base_url: &str, user_id: u32, timeout_ms: Option<u32>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id,
            timeout_ms,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Status and text body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// Issue one request and read the whole body as text.
///
/// With a timeout set, the request is aborted through an `AbortController`
/// once it elapses and `ApiError::Timeout` is returned.
async fn send(endpoint: &Endpoint, method: &str, path: &str, body: Option<String>) -> ApiResult<RawResponse> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window available".to_string()))?;

    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    if let Some(body) = body.as_deref() {
        init.set_body(&JsValue::from_str(body));
    }

    let controller = AbortController::new().map_err(js_error)?;
    init.set_signal(Some(&controller.signal()));

    let url = endpoint.url(path);
    let request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    // Dropping the timer cancels it
    let _timer = endpoint.timeout_ms.map(|ms| {
        let controller = controller.clone();
        Timeout::new(ms, move || controller.abort())
    });

    let timed_out = || controller.signal().aborted();
    let abort_error = |e: JsValue| match endpoint.timeout_ms {
        Some(ms) if timed_out() => ApiError::Timeout(ms),
        _ => js_error(e),
    };

    tracing::debug!("{} {}", method, url);
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(abort_error)?
        .dyn_into()
        .map_err(js_error)?;

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(abort_error)?;

    Ok(RawResponse {
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

/// Map non-2xx statuses to errors. `id` names the todo for 404s.
pub fn check_status(response: &RawResponse, id: Option<u32>) -> ApiResult<()> {
    if response.is_success() {
        return Ok(());
    }
    match (response.status, id) {
        (404, Some(id)) => Err(ApiError::NotFound(id)),
        (status, _) => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

/// Check the status, then decode the JSON body
pub fn parse_json<T: DeserializeOwned>(response: &RawResponse, id: Option<u32>) -> ApiResult<T> {
    check_status(response, id)?;
    Ok(serde_json::from_str(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Todo;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse { status, body: body.to_string() }
    }

    #[test]
    fn test_endpoint_url_joins_paths() {
        let endpoint = Endpoint::new("https://dummyjson.com/", 1, None);
        assert_eq!(endpoint.url("/todos"), "https://dummyjson.com/todos");
        assert_eq!(endpoint.url("todos/3"), "https://dummyjson.com/todos/3");
    }

    #[test]
    fn test_not_found_names_todo() {
        let err = check_status(&response(404, "{}"), Some(9)).unwrap_err();
        assert_eq!(err, ApiError::NotFound(9));
    }

    #[test]
    fn test_not_found_without_id_is_http_error() {
        let err = check_status(&response(404, "missing"), None).unwrap_err();
        assert_eq!(err, ApiError::Http { status: 404, body: "missing".to_string() });
    }

    #[test]
    fn test_parse_json_success() {
        let todo: Todo = parse_json(&response(201, r#"{"id":3,"todo":"z","completed":false}"#), None).unwrap();
        assert_eq!(todo, Todo::new(3, "z"));
    }

    #[test]
    fn test_parse_json_bad_body() {
        let err = parse_json::<Todo>(&response(200, "<html>"), None).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
