//! Projections from a query response into renderable descriptors.
//!
//! Both projections return `None` for "nothing to render". Callers omit the
//! section in that case; it is not an error.

mod cell;
mod chart;
mod table;

pub use cell::display_value;
pub use chart::{
    to_chart_view, BarChartView, ChartView, LegendPosition, Rgba, Series, SeriesStyle,
    CHART_TITLE,
};
pub use table::{to_table_view, TableView, TruncationNote, MAX_DISPLAY_ROWS};
