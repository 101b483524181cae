use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.status_level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::styled(&self.model.status_message, Style::default().fg(color)),
            Span::raw(" | "),
            Span::styled(&self.model.api_base, Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[Enter]", key),
            Span::raw("ask "),
            Span::styled("[Tab]", key),
            Span::raw("examples "),
            Span::styled("[↑/↓]", key),
            Span::raw("scroll "),
            Span::styled("[Esc]", key),
            Span::raw("quit"),
        ]);
        Paragraph::new(help_line)
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[1], buf);
    }
}
