use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::chart::ChartData;

/// One result row: column name to scalar value, in the key order the backend sent.
pub type Row = Map<String, Value>;

/// Body of `POST {api_base}/query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

impl QueryRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Successful answer from the query backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Echo of the question, sent by some backend versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    #[serde(default)]
    pub sql_query: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<ChartData>,

    #[serde(default)]
    pub results: Vec<Row>,

    /// Authoritative row count; may exceed `results.len()` when the backend caps the payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u64>,
}

impl QueryResponse {
    /// Insight text, treating an empty string the same as an absent one.
    pub fn insights(&self) -> Option<&str> {
        self.insights.as_deref().filter(|text| !text.is_empty())
    }

    /// Row count reported by the backend, falling back to the payload length.
    pub fn row_count(&self) -> u64 {
        self.row_count.unwrap_or(self.results.len() as u64)
    }
}
