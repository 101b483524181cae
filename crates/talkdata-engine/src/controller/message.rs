use talkdata_types::{ErrorInfo, QueryRequest, QueryResponse};

/// Everything that can change controller state.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    QuestionChanged(String),
    ExampleSelected(String),
    Submitted,
    ResolvedSuccess(QueryResponse),
    ResolvedError(ErrorInfo),
}

impl Msg {
    /// Map a finished request into its resolution message.
    pub fn resolved(outcome: Result<QueryResponse, ErrorInfo>) -> Self {
        match outcome {
            Ok(response) => Msg::ResolvedSuccess(response),
            Err(info) => Msg::ResolvedError(info),
        }
    }
}

/// Work the caller must perform on the controller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendQuery(QueryRequest),
}
