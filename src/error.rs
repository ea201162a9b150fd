//! Remote Data Source Errors

/// Errors returned by the remote todo bindings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network request failed: {0}")]
    Network(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("todo {0} not found")]
    NotFound(u32),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("no todo id left after {0}")]
    IdExhausted(u32),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::NotFound(4).to_string(), "todo 4 not found");
        assert_eq!(
            ApiError::Http { status: 500, body: "boom".to_string() }.to_string(),
            "HTTP 500: boom"
        );
        assert_eq!(ApiError::Timeout(3000).to_string(), "request timed out after 3000 ms");
        assert_eq!(ApiError::IdExhausted(u32::MAX).to_string(), "no todo id left after 4294967295");
    }
}
