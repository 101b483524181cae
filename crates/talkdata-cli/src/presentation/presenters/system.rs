use talkdata_engine::EXAMPLE_QUESTIONS;
use talkdata_types::{HealthStatus, TableList};

use crate::presentation::view_models::{
    CommandResultViewModel, ExampleListViewModel, Guidance, HealthViewModel, StatusBadge,
    TableListViewModel,
};

pub fn present_health(
    api_base: &str,
    status: &HealthStatus,
) -> CommandResultViewModel<HealthViewModel> {
    let healthy = status.is_ok();
    let content = HealthViewModel {
        api_base: api_base.to_string(),
        status: status.status.clone(),
        healthy,
    };

    if healthy {
        CommandResultViewModel::new(content).with_badge(StatusBadge::success("Backend is up"))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("Backend answered but is not ok"))
    }
}

pub fn present_tables(list: TableList) -> CommandResultViewModel<TableListViewModel> {
    let empty = list.tables.is_empty();
    let result = CommandResultViewModel::new(TableListViewModel {
        tables: list.tables,
    });

    if empty {
        result.with_badge(StatusBadge::info("No tables available"))
    } else {
        result
    }
}

pub fn present_examples() -> CommandResultViewModel<ExampleListViewModel> {
    CommandResultViewModel::new(ExampleListViewModel {
        examples: EXAMPLE_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    })
    .with_suggestion(
        Guidance::new("Ask one of them")
            .with_command(format!("talkdata ask \"{}\"", EXAMPLE_QUESTIONS[1])),
    )
}
