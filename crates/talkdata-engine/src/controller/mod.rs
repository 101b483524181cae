//! Interaction state machine.
//!
//! ```text
//!            Submitted (valid)
//!  Idle ───────────────────────► Submitting ──ResolvedSuccess──► Succeeded
//!                                   ▲   │                           │
//!                                   │   └──ResolvedError──► Failed  │
//!                                   └───────── Submitted ──────┴────┘
//! ```
//!
//! The controller never performs I/O. Accepting a submit returns
//! [`Effect::SendQuery`]; the caller runs it and feeds the outcome back as
//! [`Msg::ResolvedSuccess`] or [`Msg::ResolvedError`].

mod message;
mod presets;
mod query_controller;
mod state;

pub use message::{Effect, Msg};
pub use presets::EXAMPLE_QUESTIONS;
pub use query_controller::QueryController;
pub use state::RequestState;
