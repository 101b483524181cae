use anyhow::{bail, Result};
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use talkdata_engine::{Msg, RequestState};

use crate::context::ExecutionContext;
use crate::presentation::formatters::csv::write_table;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::session::QuerySession;

/// One submit/resolve cycle through the controller, then print the outcome.
pub fn handle(ctx: &ExecutionContext, question: String, csv: bool) -> Result<ExitCode> {
    let client = ctx.client()?.clone();
    let mut session = QuerySession::new(Arc::new(client));

    session.dispatch_blocking(Msg::QuestionChanged(question));
    session.dispatch_blocking(Msg::Submitted);

    if session.controller().state() == RequestState::Idle {
        bail!("Question must not be empty");
    }

    let result = presenters::present_ask(session.controller());
    let failed = result.content.failed();

    match (&result.content.response, csv) {
        (Some(response), true) => {
            if let Some(table) = &response.table {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                write_table(&mut out, table)?;
                out.flush()?;
            }
        }
        _ => ConsoleRenderer::new(ctx.json_mode()).render(result)?,
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
