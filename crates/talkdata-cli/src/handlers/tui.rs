use anyhow::Result;
use std::process::ExitCode;
use std::sync::Arc;

use crate::context::ExecutionContext;
use crate::presentation::renderers::{TuiApp, TuiRenderer};
use crate::session::QuerySession;

pub fn handle(ctx: &ExecutionContext) -> Result<ExitCode> {
    let client = ctx.client()?.clone();
    let api_base = ctx.settings().api_base.to_string();
    let session = QuerySession::new(Arc::new(client));

    TuiRenderer::new().run(TuiApp::new(session, api_base))?;
    Ok(ExitCode::SUCCESS)
}
