use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Table, Widget, Wrap},
};
use talkdata_engine::{BarChartView, ChartView, TableView};

use super::rgba_to_color;
use crate::presentation::formatters::number::format_value;
use crate::presentation::formatters::text::{hard_wrap, word_wrap};
use crate::presentation::view_models::{ResponseViewModel, ResultsPaneViewModel};

const MAX_COLUMN_WIDTH: u16 = 30;
const BAR_SCALE: u64 = 1000;

/// The lower pane: hint, progress, error panel or the answer sections.
///
/// The answer is laid out at full height and scrolled as a whole, so no
/// section is ever cut short.
pub struct ResultsView<'a> {
    model: &'a ResultsPaneViewModel,
    scroll: usize,
}

impl<'a> ResultsView<'a> {
    pub fn new(model: &'a ResultsPaneViewModel) -> Self {
        Self { model, scroll: 0 }
    }

    /// Lines of the answer scrolled off the top.
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Largest useful scroll offset when drawn into `area`.
    pub fn max_scroll(&self, area: Rect) -> usize {
        match self.model {
            ResultsPaneViewModel::Answered(answer) => {
                let content = AnswerSections::new(answer, area.width).height();
                content.saturating_sub(visible_rows(content, area.height)) as usize
            }
            _ => 0,
        }
    }
}

impl<'a> Widget for ResultsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.model {
            ResultsPaneViewModel::Empty { hint } => {
                placeholder(hint, Color::DarkGray).render(area, buf);
            }
            ResultsPaneViewModel::Loading { message } => {
                placeholder(message, Color::Yellow).render(area, buf);
            }
            ResultsPaneViewModel::Failed { message } => {
                let red = Style::default().fg(Color::Red);
                Paragraph::new(Span::styled(format!("Error: {message}"), red))
                    .wrap(Wrap { trim: false })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Error")
                            .border_style(red),
                    )
                    .render(area, buf);
            }
            ResultsPaneViewModel::Answered(answer) => {
                render_answer(answer, self.scroll, area, buf);
            }
        }
    }
}

fn placeholder(text: &str, color: Color) -> Paragraph<'_> {
    Paragraph::new(Span::styled(text, Style::default().fg(color)))
        .block(Block::default().borders(Borders::ALL).title("Results"))
}

/// Answer sections with their text pre-wrapped to the pane width.
struct AnswerSections<'a> {
    answer: &'a ResponseViewModel,
    sql: Vec<String>,
    insights: Option<Vec<String>>,
}

impl<'a> AnswerSections<'a> {
    fn new(answer: &'a ResponseViewModel, width: u16) -> Self {
        let inner = width.saturating_sub(2) as usize;
        Self {
            answer,
            sql: hard_wrap(&answer.sql_query, inner),
            insights: answer.insights.as_deref().map(|text| word_wrap(text, inner)),
        }
    }

    fn bar(&self) -> Option<&'a BarChartView> {
        let answer: &'a ResponseViewModel = self.answer;
        match &answer.chart {
            Some(ChartView::Bar(bar)) => Some(bar),
            None => None,
        }
    }

    /// Height of each section, borders included, in drawing order.
    fn heights(&self) -> Vec<u16> {
        let mut heights = vec![boxed(self.sql.len())];
        if let Some(insights) = &self.insights {
            heights.push(boxed(insights.len()));
        }
        if let Some(bar) = self.bar() {
            heights.push(boxed(bar.categories.len().max(1)));
        }
        if let Some(table) = &self.answer.table {
            // Header plus every row.
            heights.push(boxed(table.rows.len() + 1));
        }
        heights
    }

    fn height(&self) -> u16 {
        self.heights()
            .into_iter()
            .fold(0, |total, h| total.saturating_add(h))
    }

    fn render(self, area: Rect, buf: &mut Buffer) {
        let heights = self.heights();
        let bar = self.bar();
        let Self {
            answer,
            sql,
            insights,
        } = self;
        let last = heights.len().saturating_sub(1);
        // The last section takes whatever room is left.
        let constraints = heights.iter().enumerate().map(|(i, &h)| {
            if i == last {
                Constraint::Min(h)
            } else {
                Constraint::Length(h)
            }
        });
        let chunks = Layout::vertical(constraints).split(area);
        let mut next = chunks.iter().copied();

        if let Some(chunk) = next.next() {
            Paragraph::new(to_lines(sql))
                .style(Style::default().fg(Color::Cyan))
                .block(Block::default().borders(Borders::ALL).title("Generated SQL"))
                .render(chunk, buf);
        }

        if let Some(insights) = insights {
            if let Some(chunk) = next.next() {
                Paragraph::new(to_lines(insights))
                    .block(Block::default().borders(Borders::ALL).title("Key Insights"))
                    .render(chunk, buf);
            }
        }

        if let Some(bar) = bar {
            if let Some(chunk) = next.next() {
                render_bar_chart(bar, chunk, buf);
            }
        }

        if let Some(table) = &answer.table {
            if let Some(chunk) = next.next() {
                render_table(table, chunk, buf);
            }
        }
    }
}

fn render_answer(answer: &ResponseViewModel, scroll: usize, area: Rect, buf: &mut Buffer) {
    let sections = AnswerSections::new(answer, area.width);
    let content = sections.height();
    let visible = visible_rows(content, area.height);
    let offset = scroll.min(content.saturating_sub(visible) as usize) as u16;

    // Draw everything off screen, then copy the visible window.
    let canvas_area = Rect::new(0, 0, area.width, content.max(visible));
    let mut canvas = Buffer::empty(canvas_area);
    sections.render(canvas_area, &mut canvas);

    for y in 0..visible {
        for x in 0..area.width {
            if let (Some(src), Some(dst)) = (
                canvas.cell((x, offset + y)),
                buf.cell_mut((area.x + x, area.y + y)),
            ) {
                *dst = src.clone();
            }
        }
    }

    if visible < area.height {
        let below = content - visible - offset;
        let note = if below > 0 {
            format!("▼ {below} more lines · ↑/↓ PgUp/PgDn to scroll")
        } else {
            "▲ end of answer · Home to return to the top".to_string()
        };
        Paragraph::new(Span::styled(note, Style::default().fg(Color::DarkGray)))
            .render(Rect::new(area.x, area.y + visible, area.width, 1), buf);
    }
}

/// Rows of answer shown at once; one row is kept for the scroll note when
/// the answer does not fit.
fn visible_rows(content: u16, height: u16) -> u16 {
    if content <= height {
        height
    } else {
        height.saturating_sub(1)
    }
}

fn boxed(lines: usize) -> u16 {
    (lines.min(u16::MAX as usize - 2) as u16) + 2
}

fn to_lines(lines: Vec<String>) -> Vec<Line<'static>> {
    lines.into_iter().map(Line::from).collect()
}

fn render_bar_chart(chart: &BarChartView, area: Rect, buf: &mut Buffer) {
    let style = Style::default().fg(rgba_to_color(chart.series.style.fill));
    let max = chart.series.values.iter().copied().fold(0.0_f64, f64::max);

    // Bar lengths are integers; values are scaled against the largest one.
    let bars: Vec<Bar> = chart
        .bars()
        .map(|(label, value)| {
            let scaled = if max > 0.0 && value > 0.0 {
                ((value / max) * BAR_SCALE as f64).round() as u64
            } else {
                0
            };
            Bar::default()
                .label(Line::from(label.to_string()))
                .value(scaled)
                .text_value(format_value(value))
                .style(style)
        })
        .collect();

    let title = Line::from(vec![
        Span::raw(format!("{} ", chart.title)),
        Span::styled("■ ", style),
        Span::raw(chart.series.name.as_str()),
    ]);

    BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(style)
        .max(BAR_SCALE)
        .data(BarGroup::default().bars(&bars))
        .render(area, buf);
}

fn render_table(table: &TableView, area: Rect, buf: &mut Buffer) {
    let widths: Vec<Constraint> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let width = table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0);
            Constraint::Length((width as u16).min(MAX_COLUMN_WIDTH))
        })
        .collect();

    let header = Row::new(table.columns.iter().map(String::as_str))
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = table
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(String::as_str)));

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(table.heading());
    let mut notes = Vec::new();
    if let Some(note) = &table.truncation {
        notes.push(note.to_string());
    }
    if table.ragged_rows > 0 {
        notes.push(format!(
            "{} rows did not match the columns of the first row",
            table.ragged_rows
        ));
    }
    if !notes.is_empty() {
        block = block.title_bottom(Line::from(Span::styled(
            notes.join(" · "),
            Style::default().fg(Color::DarkGray),
        )));
    }

    Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(block)
        .render(area, buf);
}
