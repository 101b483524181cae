use anyhow::{Context, Result};
use std::process::ExitCode;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext) -> Result<ExitCode> {
    let tables = ctx
        .client()?
        .tables()
        .context("Failed to list tables")?;

    ConsoleRenderer::new(ctx.json_mode()).render(presenters::present_tables(tables))?;
    Ok(ExitCode::SUCCESS)
}
