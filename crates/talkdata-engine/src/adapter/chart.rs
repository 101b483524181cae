use serde::Serialize;
use talkdata_types::{BarChartData, ChartData};

pub const CHART_TITLE: &str = "Query Results";

const SERIES_FILL: Rgba = Rgba::new(99, 102, 241, 0.8);
const SERIES_BORDER: Rgba = Rgba::new(99, 102, 241, 1.0);
const SERIES_BORDER_WIDTH: u16 = 1;

/// Renderable chart descriptor. One variant per supported chart kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartView {
    Bar(BarChartView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartView {
    pub title: String,
    pub legend: LegendPosition,
    pub categories: Vec<String>,
    pub series: Series,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStyle {
    pub fill: Rgba,
    pub border: Rgba,
    pub border_width: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            fill: SERIES_FILL,
            border: SERIES_BORDER,
            border_width: SERIES_BORDER_WIDTH,
        }
    }
}

impl BarChartView {
    /// Category/value pairs for drawing. Extra entries on either side are dropped.
    pub fn bars(&self) -> impl Iterator<Item = (&str, f64)> {
        self.categories
            .iter()
            .map(String::as_str)
            .zip(self.series.values.iter().copied())
    }
}

/// Project the response chart payload into a renderable chart.
///
/// Only bar charts render; any other kind, or no chart at all, yields `None`.
pub fn to_chart_view(chart_data: Option<&ChartData>) -> Option<ChartView> {
    match chart_data? {
        ChartData::Bar(bar) => Some(ChartView::Bar(bar_view(bar))),
        ChartData::Unsupported { kind } => {
            tracing::debug!(kind = %kind, "chart kind not rendered");
            None
        }
    }
}

fn bar_view(bar: &BarChartData) -> BarChartView {
    BarChartView {
        title: CHART_TITLE.to_string(),
        legend: LegendPosition::Top,
        categories: bar.labels.clone(),
        series: Series {
            name: bar.label.clone(),
            values: bar.values.clone(),
            style: SeriesStyle::default(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(labels: &[&str], values: &[f64]) -> ChartData {
        ChartData::Bar(BarChartData {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            label: "Revenue".to_string(),
            values: values.to_vec(),
        })
    }

    #[test]
    fn test_bar_chart_projection() {
        let chart = bar(&["A", "B"], &[10.0, 20.0]);

        let Some(ChartView::Bar(view)) = to_chart_view(Some(&chart)) else {
            panic!("expected a bar chart view");
        };

        assert_eq!(view.title, "Query Results");
        assert_eq!(view.legend, LegendPosition::Top);
        assert_eq!(view.categories, vec!["A", "B"]);
        assert_eq!(view.series.name, "Revenue");
        assert_eq!(view.series.values.len(), view.categories.len());
        assert_eq!(view.series.style.fill, Rgba::new(99, 102, 241, 0.8));
        assert_eq!(view.series.style.border, Rgba::new(99, 102, 241, 1.0));
        assert_eq!(view.series.style.border_width, 1);
    }

    #[test]
    fn test_absent_chart_renders_nothing() {
        assert!(to_chart_view(None).is_none());
    }

    #[test]
    fn test_non_bar_kinds_render_nothing() {
        for kind in ["table", "line", "pie", "", "BAR"] {
            let chart = ChartData::Unsupported {
                kind: kind.to_string(),
            };
            assert!(to_chart_view(Some(&chart)).is_none(), "kind {kind:?}");
        }
    }

    #[test]
    fn test_mismatched_lengths_kept_verbatim() {
        let chart = bar(&["A", "B", "C"], &[1.0]);

        let Some(ChartView::Bar(view)) = to_chart_view(Some(&chart)) else {
            panic!("expected a bar chart view");
        };

        assert_eq!(view.categories.len(), 3);
        assert_eq!(view.series.values.len(), 1);
        assert_eq!(view.bars().collect::<Vec<_>>(), vec![("A", 1.0)]);
    }
}
