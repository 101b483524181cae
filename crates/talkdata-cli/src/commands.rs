use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{Config, Overrides, Settings, API_URL_ENV, CONFIG_PATH_ENV};
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};

pub fn run(cli: Cli) -> Result<ExitCode> {
    let command = cli.command.unwrap_or(Commands::Tui);
    let interactive = matches!(command, Commands::Tui);
    logging::init(cli.log_level, LogTarget::for_command(cli.log_file, interactive))?;

    let config_path = cli
        .config
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
        .or_else(Config::default_path);
    let config = match &config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };

    let overrides = Overrides {
        api_url: cli.api_url,
        env_api_url: std::env::var(API_URL_ENV).ok(),
        origin: cli.origin,
        timeout_secs: cli.timeout,
    };
    let settings = Settings::resolve(&overrides, &config)?;
    let ctx = ExecutionContext::new(settings, cli.format);

    match command {
        Commands::Ask { question, csv } => handlers::ask::handle(&ctx, question.join(" "), csv),
        Commands::Tui => handlers::tui::handle(&ctx),
        Commands::Health => handlers::health::handle(&ctx),
        Commands::Tables => handlers::tables::handle(&ctx),
        Commands::Examples => handlers::examples::handle(&ctx),
    }
}
