//! TUI view components.
//!
//! Each component is a thin ratatui `Widget` around a borrowed view model.
//! UI-only state (focus, selection, scroll) is passed in by the renderer.

pub mod examples;
pub mod header;
pub mod input;
pub mod results;
pub mod status_bar;

pub use examples::ExamplesView;
pub use header::HeaderView;
pub use input::InputView;
pub use results::ResultsView;
pub use status_bar::StatusBarView;

use ratatui::style::Color;
use talkdata_engine::Rgba;

use crate::presentation::view_models::StatusLevel;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// Terminals have no alpha channel; the color is used as is.
pub(crate) fn rgba_to_color(rgba: Rgba) -> Color {
    Color::Rgb(rgba.r, rgba.g, rgba.b)
}

pub(crate) fn focus_color(focused: bool) -> Color {
    if focused { Color::Yellow } else { Color::DarkGray }
}
