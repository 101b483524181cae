use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "talkdata")]
#[command(about = "Ask questions about your data in natural language", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend API base, absolute or a path on --origin [env: TALKDATA_API_URL] [default: /api]
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Origin used when the API base is a path [default: http://localhost:5000]
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// Config file [env: TALKDATA_CONFIG]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds, 0 disables it [default: 30]
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr (the TUI logs nowhere without it)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask one question and print the answer
    Ask {
        /// The question, e.g. "Show me sales by region"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Print the result rows as CSV instead of the full answer
        #[arg(long)]
        csv: bool,
    },

    /// Open the interactive terminal UI (default)
    Tui,

    /// Check that the backend is reachable
    Health,

    /// List the tables the backend can query
    Tables,

    /// List the example questions
    Examples,
}
