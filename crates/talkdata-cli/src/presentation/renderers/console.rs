use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewOptions};
use crate::presentation::views::heading;

pub struct ConsoleRenderer {
    json_mode: bool,
    options: ViewOptions,
}

impl ConsoleRenderer {
    /// Colors only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn new(json_mode: bool) -> Self {
        let stdout = io::stdout();
        let color = stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none();
        let width = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| w)
            .unwrap_or(ViewOptions::default().width);

        Self::with_options(json_mode, ViewOptions { color, width })
    }

    pub fn with_options(json_mode: bool, options: ViewOptions) -> Self {
        Self { json_mode, options }
    }

    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            writeln!(out, "{} {}", badge.icon(), heading(&badge.label, self.options))?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !result.suggestions.is_empty() {
            let tips = "Tips:";
            if self.options.color {
                writeln!(out, "\n{}", tips.yellow().bold())?;
            } else {
                writeln!(out, "\n{}", tips)?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.options.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}
