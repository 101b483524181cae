use anyhow::Result;
use std::process::ExitCode;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext) -> Result<ExitCode> {
    ConsoleRenderer::new(ctx.json_mode()).render(presenters::present_examples())?;
    Ok(ExitCode::SUCCESS)
}
