//! Wire types exchanged with the natural-language query backend.
//!
//! Everything here is a plain serde model. Decoding is deliberately tolerant:
//! a response with an odd chart payload or ragged rows still decodes, and the
//! projection layer in `talkdata-engine` decides what can be rendered.

pub mod catalog;
pub mod chart;
pub mod error_info;
pub mod query;

pub use catalog::{ErrorBody, HealthStatus, TableList};
pub use chart::{BarChartData, ChartData};
pub use error_info::{ErrorInfo, FALLBACK_ERROR_MESSAGE};
pub use query::{QueryRequest, QueryResponse, Row};
