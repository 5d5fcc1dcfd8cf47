// ============================================================================
// REST API Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct InvalidApiKeyError(pub String);

impl InvalidApiKeyError {
    pub fn missing_key() -> Self {
        Self("API key is missing".to_string())
    }

    pub fn invalid_format() -> Self {
        Self("API key has invalid format".to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status {status}: {}", summarize_body(.body))]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

const BODY_SUMMARY_LENGTH: usize = 120;

/// First characters of a response body, enough to recognise an error page.
pub fn summarize_body(body: &str) -> String {
    match body.char_indices().nth(BODY_SUMMARY_LENGTH) {
        Some((cut, _)) => format!("{} (truncated...)", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_is_kept() {
        let error = RestError::Status {
            status: 500,
            body: "Internal error".to_string(),
        };
        assert_eq!(error.to_string(), "Unexpected HTTP status 500: Internal error");
    }

    #[test]
    fn test_long_body_is_truncated() {
        let error = RestError::Status {
            status: 502,
            body: "<html>".repeat(20_000),
        };
        let message = error.to_string();

        assert!(message.starts_with("Unexpected HTTP status 502: <html><html>"));
        assert!(message.ends_with(" (truncated...)"));
        assert_eq!(
            message.len(),
            "Unexpected HTTP status 502: ".len() + 120 + " (truncated...)".len()
        );
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let summary = summarize_body(&"ž".repeat(200));
        assert_eq!(summary.chars().count(), 120 + " (truncated...)".len());
    }
}
