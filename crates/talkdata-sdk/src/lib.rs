//! Client for the talkdata query backend.
//!
//! ```no_run
//! use talkdata_sdk::{ApiBase, Client, ClientConfig};
//!
//! # fn main() -> talkdata_sdk::Result<()> {
//! let api_base = ApiBase::resolve("/api", "http://localhost:5000")?;
//! let client = Client::new(ClientConfig::new(api_base))?;
//!
//! let response = client.ask("Show me sales by region")?;
//! println!("{}", response.sql_query);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoint;
pub mod error;

pub use client::{Client, ClientConfig, QueryBackend, DEFAULT_TIMEOUT};
pub use endpoint::{ApiBase, DEFAULT_API_BASE, DEFAULT_ORIGIN};
pub use error::{Error, Result};

pub use talkdata_types as types;
