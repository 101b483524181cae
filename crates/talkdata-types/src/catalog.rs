use serde::{Deserialize, Serialize};

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `GET {api_base}/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Body of `GET {api_base}/tables`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableList {
    #[serde(default)]
    pub tables: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_tolerates_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());

        let body: ErrorBody = serde_json::from_str(r#"{"error": "Question is required"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Question is required"));
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(health.is_ok());
    }
}
