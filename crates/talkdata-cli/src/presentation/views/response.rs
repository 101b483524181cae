use owo_colors::OwoColorize;
use std::fmt;
use talkdata_engine::{BarChartView, ChartView, TableView};

use super::{dim, error_text, heading};
use crate::presentation::formatters::number::format_value;
use crate::presentation::formatters::text::{pad_cell, truncate};
use crate::presentation::view_models::{AskViewModel, CreateView, ResponseViewModel, ViewOptions};

const MAX_COLUMN_WIDTH: usize = 40;
const MAX_LABEL_WIDTH: usize = 20;
const MIN_BAR_WIDTH: usize = 10;
const BAR_GLYPH: char = '█';

impl CreateView for AskViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(AskView::new(self, options))
    }
}

pub struct AskView<'a> {
    data: &'a AskViewModel,
    options: ViewOptions,
}

impl<'a> AskView<'a> {
    pub fn new(data: &'a AskViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for AskView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.data.error {
            return writeln!(f, "{}", error_text(&format!("Error: {message}"), self.options));
        }
        match &self.data.response {
            Some(response) => write!(f, "{}", ResponseView::new(response, self.options)),
            None => Ok(()),
        }
    }
}

/// SQL, insights, chart and table, in that order. Absent sections are skipped.
pub struct ResponseView<'a> {
    data: &'a ResponseViewModel,
    options: ViewOptions,
}

impl<'a> ResponseView<'a> {
    pub fn new(data: &'a ResponseViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for ResponseView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", heading("Generated SQL:", self.options))?;
        for line in self.data.sql_query.lines() {
            writeln!(f, "  {}", line)?;
        }

        if let Some(insights) = &self.data.insights {
            writeln!(f)?;
            writeln!(f, "{}", heading("Key Insights:", self.options))?;
            for line in insights.lines() {
                writeln!(f, "  {}", line)?;
            }
        }

        if let Some(ChartView::Bar(chart)) = &self.data.chart {
            writeln!(f)?;
            write!(f, "{}", BarChartText::new(chart, self.options))?;
        }

        if let Some(table) = &self.data.table {
            writeln!(f)?;
            write!(f, "{}", TableText::new(table, self.options))?;
        }

        Ok(())
    }
}

struct BarChartText<'a> {
    chart: &'a BarChartView,
    options: ViewOptions,
}

impl<'a> BarChartText<'a> {
    fn new(chart: &'a BarChartView, options: ViewOptions) -> Self {
        Self { chart, options }
    }

    fn bar(&self, len: usize) -> String {
        let bar: String = std::iter::repeat_n(BAR_GLYPH, len).collect();
        if self.options.color {
            let fill = self.chart.series.style.fill;
            bar.truecolor(fill.r, fill.g, fill.b).to_string()
        } else {
            bar
        }
    }
}

impl<'a> fmt::Display for BarChartText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", heading(&self.chart.title, self.options))?;
        writeln!(f, "  {} {}", self.bar(1), self.chart.series.name)?;

        let bars: Vec<(String, String, f64)> = self
            .chart
            .bars()
            .map(|(label, value)| (truncate(label, MAX_LABEL_WIDTH), format_value(value), value))
            .collect();

        let label_width = bars.iter().map(|(l, _, _)| l.chars().count()).max().unwrap_or(0);
        let value_width = bars.iter().map(|(_, v, _)| v.len()).max().unwrap_or(0);
        let area = (self.options.width as usize)
            .saturating_sub(label_width + value_width + 6)
            .max(MIN_BAR_WIDTH);
        let max = bars.iter().map(|(_, _, v)| *v).fold(0.0_f64, f64::max);

        for (label, value_text, value) in &bars {
            let len = if max > 0.0 && *value > 0.0 {
                ((value / max) * area as f64).round() as usize
            } else {
                0
            };
            writeln!(
                f,
                "  {} {} {}",
                pad_cell(label, label_width),
                self.bar(len),
                value_text
            )?;
        }
        Ok(())
    }
}

struct TableText<'a> {
    table: &'a TableView,
    options: ViewOptions,
}

impl<'a> TableText<'a> {
    fn new(table: &'a TableView, options: ViewOptions) -> Self {
        Self { table, options }
    }

    fn column_widths(&self) -> Vec<usize> {
        self.table
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.table
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(column.chars().count()))
                    .max()
                    .unwrap_or(0)
                    .min(MAX_COLUMN_WIDTH)
            })
            .collect()
    }
}

impl<'a> fmt::Display for TableText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        writeln!(f, "{}", heading(&self.table.heading(), self.options))?;

        let header = join_cells(&self.table.columns, &widths);
        writeln!(f, "{}", heading(&header, self.options))?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", join_cells(&rule, &widths))?;

        for row in &self.table.rows {
            writeln!(f, "{}", join_cells(row, &widths))?;
        }

        if let Some(note) = &self.table.truncation {
            writeln!(f, "{}", dim(&note.to_string(), self.options))?;
        }
        if self.table.ragged_rows > 0 {
            writeln!(
                f,
                "{}",
                dim(
                    &format!(
                        "{} rows did not match the columns of the first row",
                        self.table.ragged_rows
                    ),
                    self.options
                )
            )?;
        }
        Ok(())
    }
}

fn join_cells(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_cell(cell, *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_response;
    use talkdata_testing::fixtures::{
        large_response, revenue_chart_response, sales_by_region_response,
    };

    fn plain() -> ViewOptions {
        ViewOptions {
            color: false,
            width: 40,
        }
    }

    #[test]
    fn test_sales_by_region_text() {
        let vm = present_response(&sales_by_region_response());

        let text = ResponseView::new(&vm, plain()).to_string();

        assert_eq!(
            text,
            "Generated SQL:\n  SELECT region, SUM(sales) AS sales FROM orders GROUP BY region\n\nResults (1 rows)\nregion  sales\n------  -----\nEast    100\n"
        );
        assert!(!text.contains("Key Insights:"));
    }

    #[test]
    fn test_bar_chart_text() {
        let vm = present_response(&revenue_chart_response());

        let text = ResponseView::new(&vm, plain()).to_string();

        assert!(text.contains("Key Insights:\n  B brings in twice the revenue of A.\n"));
        assert!(text.contains("Query Results\n  █ Revenue\n"));
        // width 40 - (1 + 2 + 6) leaves 31 columns for the longest bar
        let bar_line = |label: &str| {
            text.lines()
                .find(|l| l.starts_with(&format!("  {label} ")) && l.contains('█'))
                .unwrap()
        };
        let (a_line, b_line) = (bar_line("A"), bar_line("B"));
        assert_eq!(b_line.matches('█').count(), 31);
        assert_eq!(a_line.matches('█').count(), 16);
        assert!(b_line.ends_with(" 20"));
    }

    #[test]
    fn test_truncation_note_printed() {
        let vm = present_response(&large_response(60, 120));

        let text = ResponseView::new(&vm, plain()).to_string();

        assert!(text.contains("Results (120 rows)\n"));
        assert!(text.ends_with("Showing first 50 of 120 rows\n"));
        assert_eq!(text.lines().filter(|l| l.contains("item-")).count(), 50);
    }

    #[test]
    fn test_error_panel() {
        let vm = AskViewModel {
            question: "which one?".to_string(),
            state: "failed".to_string(),
            response: None,
            error: Some("ambiguous column".to_string()),
        };

        assert_eq!(AskView::new(&vm, plain()).to_string(), "Error: ambiguous column\n");
    }
}
