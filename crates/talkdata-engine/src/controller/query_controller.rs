use talkdata_types::{ErrorInfo, QueryRequest, QueryResponse};

use super::message::{Effect, Msg};
use super::presets::EXAMPLE_QUESTIONS;
use super::state::RequestState;

/// Single source of truth for the interaction state.
///
/// `response` and `error` are never both set. While the state is
/// [`RequestState::Submitting`] further submits are dropped, so at most one
/// request is outstanding.
#[derive(Debug, Default)]
pub struct QueryController {
    question: String,
    state: RequestState,
    response: Option<QueryResponse>,
    error: Option<ErrorInfo>,
}

impl QueryController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one message. Returns the effect to run, if any.
    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::QuestionChanged(text) => {
                self.set_question(text);
                None
            }
            Msg::ExampleSelected(text) => {
                self.select_example(text);
                None
            }
            Msg::Submitted => self.submit(),
            Msg::ResolvedSuccess(response) => {
                self.resolve_success(response);
                None
            }
            Msg::ResolvedError(info) => {
                self.resolve_error(info);
                None
            }
        }
    }

    /// Replace the pending question. No validation, no transition.
    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    /// Fill the question from a preset. Does not submit.
    pub fn select_example(&mut self, text: impl Into<String>) {
        self.set_question(text);
    }

    /// Fill the question from [`EXAMPLE_QUESTIONS`]; out-of-range indices are ignored.
    pub fn select_example_at(&mut self, index: usize) -> bool {
        match EXAMPLE_QUESTIONS.get(index) {
            Some(question) => {
                self.select_example(*question);
                true
            }
            None => false,
        }
    }

    pub fn submit(&mut self) -> Option<Effect> {
        if self.question.trim().is_empty() {
            tracing::debug!("submit ignored: empty question");
            return None;
        }
        if self.state.is_submitting() {
            tracing::debug!("submit ignored: request already in flight");
            return None;
        }

        self.response = None;
        self.error = None;
        self.transition(RequestState::Submitting);

        Some(Effect::SendQuery(QueryRequest::new(self.question.clone())))
    }

    pub fn resolve_success(&mut self, response: QueryResponse) {
        if !self.accepts_resolution() {
            return;
        }
        self.error = None;
        self.response = Some(response);
        self.transition(RequestState::Succeeded);
    }

    pub fn resolve_error(&mut self, info: ErrorInfo) {
        if !self.accepts_resolution() {
            return;
        }
        self.response = None;
        self.error = Some(info);
        self.transition(RequestState::Failed);
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn response(&self) -> Option<&QueryResponse> {
        self.response.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    /// Whether a submit right now would be accepted.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.question.trim().is_empty()
    }

    fn accepts_resolution(&self) -> bool {
        if self.state.is_submitting() {
            return true;
        }
        tracing::warn!(state = %self.state, "stale resolution ignored");
        false
    }

    fn transition(&mut self, next: RequestState) {
        tracing::debug!(from = %self.state, to = %next, "request state");
        self.state = next;
    }
}
