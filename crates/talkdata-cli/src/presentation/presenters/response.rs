use talkdata_engine::{to_chart_view, to_table_view, QueryController};
use talkdata_types::QueryResponse;

use crate::presentation::view_models::{
    AskViewModel, CommandResultViewModel, Guidance, ResponseViewModel, StatusBadge,
};

pub fn present_response(response: &QueryResponse) -> ResponseViewModel {
    ResponseViewModel {
        sql_query: response.sql_query.clone(),
        insights: response.insights().map(str::to_string),
        chart: to_chart_view(response.chart_data.as_ref()),
        table: to_table_view(&response.results, response.row_count()),
    }
}

/// Console result for one question, taken from the controller after it has
/// resolved.
pub fn present_ask(controller: &QueryController) -> CommandResultViewModel<AskViewModel> {
    let content = AskViewModel {
        question: controller.question().to_string(),
        state: controller.state().to_string(),
        response: controller.response().map(present_response),
        error: controller.error().map(|e| e.message.clone()),
    };

    if content.failed() {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::error("Query failed"))
            .with_suggestion(
                Guidance::new("Check that the backend is reachable")
                    .with_command("talkdata health"),
            )
    } else {
        CommandResultViewModel::new(content)
    }
}
