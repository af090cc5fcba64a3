use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("page number must be greater than 0 (got {0})")]
    InvalidPage(i64),

    #[error("search query must not be empty")]
    EmptyQuery,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("request failed: {status}{}", detail(.message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("request failed: rate limit exceeded{}", reset_at(.reset))]
    RateLimited { reset: Option<String> },

    #[error("request failed: invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// True for errors caught before any network activity.
    pub fn is_usage(&self) -> bool {
        matches!(self, SearchError::InvalidPage(_) | SearchError::EmptyQuery)
    }
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default()
}

fn reset_at(reset: &Option<String>) -> String {
    reset
        .as_deref()
        .map(|r| format!(", resets at {r}"))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_is_appended_when_present() {
        let err = SearchError::Status {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: Some("Validation Failed".into()),
        };
        assert_eq!(
            err.to_string(),
            "request failed: 422 Unprocessable Entity (Validation Failed)"
        );

        let err = SearchError::Status {
            status: StatusCode::BAD_GATEWAY,
            message: None,
        };
        assert_eq!(err.to_string(), "request failed: 502 Bad Gateway");
    }

    #[test]
    fn usage_errors_are_distinguished() {
        assert!(SearchError::InvalidPage(0).is_usage());
        assert!(SearchError::EmptyQuery.is_usage());
        assert!(!SearchError::RateLimited { reset: None }.is_usage());
    }
}
