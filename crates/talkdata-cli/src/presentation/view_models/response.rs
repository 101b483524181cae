use serde::Serialize;
use talkdata_engine::{ChartView, TableView};

/// One answered question, ready to draw.
///
/// `chart` and `table` are `None` when there is nothing to draw; the section
/// is omitted rather than shown empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseViewModel {
    pub sql_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableView>,
}

/// Outcome of `talkdata ask`. Exactly one of `response` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AskViewModel {
    pub question: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AskViewModel {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}
