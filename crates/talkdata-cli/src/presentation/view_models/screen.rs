use serde::Serialize;

use super::common::StatusLevel;
use super::response::ResponseViewModel;

/// Everything the TUI draws in one frame. Rebuilt from the controller after
/// every state change; UI-only state (focus, scroll) lives in the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub title: String,
    pub subtitle: String,
    pub input: InputViewModel,
    pub examples: Vec<ExampleListItem>,
    pub results: ResultsPaneViewModel,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputViewModel {
    pub question: String,
    pub placeholder: String,
    /// "Ask", or "Processing..." while a request is in flight.
    pub button_label: String,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExampleListItem {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "pane", rename_all = "snake_case")]
pub enum ResultsPaneViewModel {
    Empty { hint: String },
    Loading { message: String },
    Failed { message: String },
    Answered(ResponseViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub api_base: String,
    pub state: String,
    pub status_level: StatusLevel,
    pub status_message: String,
}
