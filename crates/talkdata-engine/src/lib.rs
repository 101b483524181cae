//! Client-side core of talkdata.
//!
//! - [`controller`]: the interaction state machine. User actions and network
//!   resolutions go in as [`Msg`]s, network work comes out as [`Effect`]s.
//! - [`adapter`]: pure projections from a [`talkdata_types::QueryResponse`]
//!   into renderable chart and table descriptors.
//!
//! Nothing in this crate performs I/O.

pub mod adapter;
pub mod controller;

pub use adapter::{
    to_chart_view, to_table_view, BarChartView, ChartView, LegendPosition, Rgba, Series,
    SeriesStyle, TableView, TruncationNote, CHART_TITLE, MAX_DISPLAY_ROWS,
};
pub use controller::{Effect, Msg, QueryController, RequestState, EXAMPLE_QUESTIONS};
