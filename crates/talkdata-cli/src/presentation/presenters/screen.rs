use chrono::{DateTime, Local};
use std::time::Duration;
use talkdata_engine::{QueryController, RequestState, EXAMPLE_QUESTIONS};

use crate::presentation::formatters::number::format_latency;
use crate::presentation::view_models::{
    ExampleListItem, InputViewModel, ResultsPaneViewModel, ScreenViewModel, StatusBarViewModel,
    StatusLevel,
};

use super::response::present_response;

pub const TITLE: &str = "Talk to Data";
pub const SUBTITLE: &str = "Ask questions about your data in natural language";
const PLACEHOLDER: &str = "Ask a question about your data...";

/// Facts about the session that the controller does not track.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenContext<'a> {
    pub api_base: &'a str,
    /// Round trip of the last resolved request.
    pub latency: Option<Duration>,
    pub resolved_at: Option<DateTime<Local>>,
}

pub fn present_screen(
    controller: &QueryController,
    context: ScreenContext<'_>,
) -> ScreenViewModel {
    let submitting = controller.is_submitting();

    ScreenViewModel {
        title: TITLE.to_string(),
        subtitle: SUBTITLE.to_string(),
        input: InputViewModel {
            question: controller.question().to_string(),
            placeholder: PLACEHOLDER.to_string(),
            button_label: if submitting { "Processing..." } else { "Ask" }.to_string(),
            submit_enabled: controller.can_submit(),
        },
        examples: EXAMPLE_QUESTIONS
            .iter()
            .map(|text| ExampleListItem {
                text: text.to_string(),
            })
            .collect(),
        results: present_results(controller),
        status_bar: present_status_bar(controller, context),
    }
}

fn present_results(controller: &QueryController) -> ResultsPaneViewModel {
    if let Some(error) = controller.error() {
        return ResultsPaneViewModel::Failed {
            message: error.message.clone(),
        };
    }
    if let Some(response) = controller.response() {
        return ResultsPaneViewModel::Answered(present_response(response));
    }
    if controller.is_submitting() {
        return ResultsPaneViewModel::Loading {
            message: "Processing...".to_string(),
        };
    }
    ResultsPaneViewModel::Empty {
        hint: "Type a question or pick an example, then press Enter".to_string(),
    }
}

fn present_status_bar(
    controller: &QueryController,
    context: ScreenContext<'_>,
) -> StatusBarViewModel {
    let state = controller.state();
    let when = context
        .resolved_at
        .map(|at| at.format("%H:%M:%S").to_string());

    let (status_level, status_message) = match state {
        RequestState::Idle => (StatusLevel::Info, "Ready".to_string()),
        RequestState::Submitting => (
            StatusLevel::Warning,
            "Waiting for the backend...".to_string(),
        ),
        RequestState::Succeeded => {
            let mut message = "Answered".to_string();
            if let Some(latency) = context.latency {
                message.push_str(&format!(" in {}", format_latency(latency)));
            }
            if let Some(when) = &when {
                message.push_str(&format!(" at {when}"));
            }
            (StatusLevel::Success, message)
        }
        RequestState::Failed => {
            let message = match &when {
                Some(when) => format!("Failed at {when}"),
                None => "Failed".to_string(),
            };
            (StatusLevel::Error, message)
        }
    };

    StatusBarViewModel {
        api_base: context.api_base.to_string(),
        state: state.to_string(),
        status_level,
        status_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talkdata_engine::Msg;
    use talkdata_testing::fixtures::sales_by_region_response;
    use talkdata_types::ErrorInfo;

    const API: &str = "http://localhost:5000/api";

    fn context() -> ScreenContext<'static> {
        ScreenContext {
            api_base: API,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_screen() {
        let controller = QueryController::new();

        let screen = present_screen(&controller, context());

        assert_eq!(screen.title, "Talk to Data");
        assert_eq!(screen.input.button_label, "Ask");
        assert!(!screen.input.submit_enabled);
        assert_eq!(screen.examples.len(), EXAMPLE_QUESTIONS.len());
        assert!(matches!(screen.results, ResultsPaneViewModel::Empty { .. }));
        assert_eq!(screen.status_bar.state, "idle");
        assert_eq!(screen.status_bar.api_base, API);
    }

    #[test]
    fn test_submitting_shows_processing() {
        let mut controller = QueryController::new();
        controller.update(Msg::QuestionChanged("Show me sales by region".to_string()));
        controller.update(Msg::Submitted);

        let screen = present_screen(&controller, context());

        assert_eq!(screen.input.button_label, "Processing...");
        assert!(!screen.input.submit_enabled);
        assert!(matches!(screen.results, ResultsPaneViewModel::Loading { .. }));
        assert_eq!(screen.status_bar.status_level, StatusLevel::Warning);
    }

    #[test]
    fn test_answered_with_latency() {
        let mut controller = QueryController::new();
        controller.update(Msg::QuestionChanged("Show me sales by region".to_string()));
        controller.update(Msg::Submitted);
        controller.update(Msg::ResolvedSuccess(sales_by_region_response()));

        let screen = present_screen(
            &controller,
            ScreenContext {
                latency: Some(Duration::from_millis(1250)),
                ..context()
            },
        );

        let ResultsPaneViewModel::Answered(answer) = &screen.results else {
            panic!("expected an answer");
        };
        assert!(answer.table.is_some());
        assert_eq!(screen.input.button_label, "Ask");
        assert!(screen.input.submit_enabled);
        assert_eq!(screen.status_bar.status_message, "Answered in 1.25s");
    }

    #[test]
    fn test_failed_shows_error_not_answer() {
        let mut controller = QueryController::new();
        controller.update(Msg::QuestionChanged("q".to_string()));
        controller.update(Msg::Submitted);
        controller.update(Msg::ResolvedError(ErrorInfo::fallback()));

        let screen = present_screen(&controller, context());

        let ResultsPaneViewModel::Failed { message } = &screen.results else {
            panic!("expected an error pane");
        };
        assert_eq!(message, "An error occurred");
        assert_eq!(screen.status_bar.status_level, StatusLevel::Error);
    }
}
