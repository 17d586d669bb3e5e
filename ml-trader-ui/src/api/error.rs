//! API Error Types
//!
//! Every failure of a request is normalized into [`ApiError`] before it
//! reaches the request hook, so screens only ever deal with one type.

use thiserror::Error;

/// Message used when a failure carries nothing worth showing.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Request failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request could not be built (bad body, bad header)
    #[error("Request build error: {0}")]
    Build(String),

    /// Transport failure: DNS, refused connection, CORS, aborted fetch
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Decode(String),

    /// Failure with no usable description
    #[error("An unknown error occurred")]
    Unknown,
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    ///
    /// Bodies of the form `{"detail": "..."}` keep their detail; validation
    /// errors with a list detail are flattened; anything else falls back to
    /// a generic status line.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| detail_message(&value))
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        ApiError::Status { status, message }
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 404 answers
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn detail_message(value: &serde_json::Value) -> Option<String> {
    let detail = value.get("detail").or_else(|| value.get("error"))?;
    match detail {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| {
                    item.get("msg")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                        .or_else(|| item.as_str().map(str::to_string))
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        serde_json::Value::Object(obj) => obj
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        _ => None,
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) => {
                if js.message.trim().is_empty() {
                    ApiError::Unknown
                } else {
                    ApiError::Network(js.message)
                }
            }
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            gloo_net::Error::GlooError(msg) => {
                if msg.trim().is_empty() {
                    ApiError::Unknown
                } else {
                    ApiError::Network(msg)
                }
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_keeps_detail() {
        let err = ApiError::from_status(404, r#"{"detail": "No market data found for TSLA"}"#);
        assert_eq!(err.to_string(), "No market data found for TSLA");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_status_flattens_validation_list() {
        let body = r#"{"detail": [{"msg": "field required"}, {"msg": "value is not a valid date"}]}"#;
        let err = ApiError::from_status(422, body);
        assert_eq!(err.to_string(), "field required; value is not a valid date");
    }

    #[test]
    fn test_status_without_body_is_generic() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status code 502");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_blank_gloo_error_is_unknown() {
        let err: ApiError = gloo_net::Error::GlooError("  ".to_string()).into();
        assert_eq!(err, ApiError::Unknown);
        assert_eq!(err.to_string(), UNKNOWN_ERROR_MESSAGE);
    }
}
