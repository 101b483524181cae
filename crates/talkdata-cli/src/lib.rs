// NOTE: talkdata Architecture
//
// Three layers, each in its own crate:
// - talkdata-engine owns every decision: the request state machine and the
//   projections that turn a backend answer into a chart and a table.
// - talkdata-sdk owns the wire: one blocking HTTP client, nothing else.
// - this crate wires them to a terminal. Handlers build a QuerySession,
//   presenters turn controller state into view models, renderers draw them.
//
// The controller is only ever touched from the thread that owns the
// QuerySession. Network calls run on a worker thread and come back as
// messages, so the UI stays responsive while a question is in flight.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod session;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
