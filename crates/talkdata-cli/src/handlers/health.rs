use anyhow::{Context, Result};
use std::process::ExitCode;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext) -> Result<ExitCode> {
    let client = ctx.client()?;
    let status = client
        .health()
        .with_context(|| format!("Backend at {} is not reachable", client.api_base()))?;

    let result = presenters::present_health(client.api_base().as_str(), &status);
    let healthy = result.content.healthy;
    ConsoleRenderer::new(ctx.json_mode()).render(result)?;

    Ok(if healthy {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
