//! Console views: `fmt::Display` wrappers that borrow a view model.
//!
//! `tui/` holds the ratatui counterparts.

pub mod response;
pub mod system;
pub mod tui;

pub use response::{AskView, ResponseView};

use owo_colors::OwoColorize;

use crate::presentation::view_models::ViewOptions;

pub(crate) fn heading(text: &str, options: ViewOptions) -> String {
    if options.color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn error_text(text: &str, options: ViewOptions) -> String {
    if options.color {
        text.red().bold().to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn dim(text: &str, options: ViewOptions) -> String {
    if options.color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
