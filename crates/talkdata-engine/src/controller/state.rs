use serde::Serialize;
use std::fmt;

/// Lifecycle of the current query. `Idle` is only ever the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl RequestState {
    pub fn is_submitting(self) -> bool {
        self == RequestState::Submitting
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestState::Idle => write!(f, "idle"),
            RequestState::Submitting => write!(f, "submitting"),
            RequestState::Succeeded => write!(f, "succeeded"),
            RequestState::Failed => write!(f, "failed"),
        }
    }
}
