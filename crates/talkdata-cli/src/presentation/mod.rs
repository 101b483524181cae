//! # Presentation Layer
//!
//! Everything between controller state and the terminal. The layering is an
//! adaptation of MVVM so that nothing here makes decisions the engine owns.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!  (session)       (converter)       (contract)        (view)        (console/TUI/JSON)
//! ```
//!
//! ## Where does code go?
//!
//! ### `view_models/`
//! Plain data, always `Serialize`. If it would look wrong as `--format json`
//! output, it does not belong here.
//!
//! ### `presenters/`
//! Pure functions from controller state and responses to view models. Chart
//! and table projection happens here, through `talkdata_engine::adapter`.
//!
//! ### `views/`
//! `fmt::Display` wrappers for the console and ratatui `Widget` wrappers for
//! the TUI. They borrow a view model and only lay it out.
//!
//! ### `renderers/`
//! Output strategies: `console.rs` prints a `CommandResultViewModel` as text
//! or JSON, `tui.rs` owns the terminal and the event loop.
//!
//! ### `formatters/`
//! Small string helpers shared by views (truncation, number formatting, CSV).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
