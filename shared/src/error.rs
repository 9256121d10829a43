use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the REST client. Every variant renders to a message
/// that can be shown as-is in a screen's error banner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// Rejected client-side before any request was sent
    #[error("{0}")]
    InvalidInput(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Build a status error, preferring the body's `message` then `error`
    /// field, then the raw body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = message_from_body(body).unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("HTTP {}", status)
            } else {
                trimmed.to_string()
            }
        });
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Pull a human-readable message out of a JSON error body.
pub fn message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// A form that failed client-side validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_wins_over_error_field() {
        let body = r#"{"message":"Barber not found","error":"Not Found"}"#;
        let err = ApiError::from_response(404, body);
        assert_eq!(err.to_string(), "Barber not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_field_used_when_message_missing() {
        let err = ApiError::from_response(500, r#"{"error":"Internal Server Error"}"#);
        assert_eq!(err.to_string(), "Internal Server Error");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_falls_back_to_raw_text_then_status() {
        assert_eq!(ApiError::from_response(400, "ID must be greater than 0").to_string(), "ID must be greater than 0");
        assert_eq!(ApiError::from_response(502, "   ").to_string(), "HTTP 502");
        // Blank message field is ignored
        assert_eq!(ApiError::from_response(400, r#"{"message":"","error":"Bad Request"}"#).to_string(), "Bad Request");
    }

    #[test]
    fn test_validation_error_converts_to_invalid_input() {
        let err: ApiError = ValidationError::new("Name is required").into();
        assert_eq!(err, ApiError::InvalidInput("Name is required".to_string()));
        assert!(!err.is_not_found());
    }
}
