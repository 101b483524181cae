use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown when the backend gives no usable error text.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// User-facing failure message for a query that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_ERROR_MESSAGE)
    }

    /// Use the backend's error text when present and non-empty.
    pub fn from_backend_message(message: Option<&str>) -> Self {
        match message {
            Some(text) if !text.is_empty() => Self::new(text),
            _ => Self::fallback(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_used_verbatim() {
        let info = ErrorInfo::from_backend_message(Some("ambiguous column"));
        assert_eq!(info.message, "ambiguous column");
    }

    #[test]
    fn test_missing_or_empty_message_falls_back() {
        assert_eq!(ErrorInfo::from_backend_message(None).message, "An error occurred");
        assert_eq!(ErrorInfo::from_backend_message(Some("")).message, "An error occurred");
    }
}
