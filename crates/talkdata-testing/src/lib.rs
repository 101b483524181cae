//! Shared fixtures for talkdata tests.
//!
//! - [`fixtures`]: canned backend bodies and decoded responses
//! - [`backend`]: an in-memory [`talkdata_sdk::QueryBackend`]
//! - [`config`]: temporary config files

pub mod backend;
pub mod config;
pub mod fixtures;

pub use backend::FakeBackend;
pub use config::TempConfig;
