//! Errors surfaced by calls to the portal API.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never got an answer.
    #[error("Unable to reach the API. Please check your connection.")]
    Network,
    /// The answer could not be decoded into the expected shape.
    #[error("Unexpected response from the API: {0}")]
    Decode(String),
    /// The action needs a signed-in user.
    #[error("You need to sign in first.")]
    Unauthenticated,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Builds the error for a failed response from its raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: error_message(body),
        }
    }
}

/// Human readable message from an API error body.
///
/// JSON bodies are searched for `error`, `message` and `errors` in that
/// order; validation errors (`{"field": ["msg", ...]}`) are flattened and
/// joined with `", "`. Non-JSON bodies are used verbatim.
pub fn error_message(body: &str) -> String {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !body.trim().is_empty() => return body.to_string(),
        Err(_) => return "An error occurred".to_string(),
    };
    let Value::Object(fields) = parsed else {
        return match parsed {
            Value::String(s) => s,
            _ => "Request failed".to_string(),
        };
    };

    for key in ["error", "message", "errors"] {
        match fields.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(Value::Object(map)) => {
                let messages: Vec<String> = map.values().flat_map(flatten_messages).collect();
                if !messages.is_empty() {
                    return messages.join(", ");
                }
            }
            Some(Value::Array(items)) => {
                let messages: Vec<String> = items.iter().flat_map(flatten_messages).collect();
                if !messages.is_empty() {
                    return messages.join(", ");
                }
            }
            _ => {}
        }
    }
    "Request failed".to_string()
}

fn flatten_messages(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items.iter().flat_map(flatten_messages).collect(),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_error_then_message() {
        assert_eq!(error_message(r#"{"error":"Unauthorized","message":"x"}"#), "Unauthorized");
        assert_eq!(error_message(r#"{"message":"Invalid credentials"}"#), "Invalid credentials");
    }

    #[test]
    fn flattens_validation_errors() {
        let body = r#"{"errors":{"email":["The email field is required."],"password":["Too short.","Weak."]}}"#;
        assert_eq!(
            error_message(body),
            "The email field is required., Too short., Weak."
        );
    }

    #[test]
    fn plain_text_and_empty_bodies() {
        assert_eq!(error_message("Server Error"), "Server Error");
        assert_eq!(error_message(""), "An error occurred");
        assert_eq!(error_message("{}"), "Request failed");
    }

    #[test]
    fn status_error_displays_message() {
        let err = ApiError::from_response(422, r#"{"message":"Bad input"}"#);
        assert_eq!(err.to_string(), "Bad input");
        assert_eq!(err.status(), Some(422));
        assert_eq!(ApiError::Network.status(), None);
    }
}
