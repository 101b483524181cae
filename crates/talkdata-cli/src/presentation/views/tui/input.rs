use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::focus_color;
use crate::presentation::view_models::InputViewModel;

/// Question line with the submit hint on the right.
pub struct InputView<'a> {
    model: &'a InputViewModel,
    focused: bool,
}

impl<'a> InputView<'a> {
    pub fn new(model: &'a InputViewModel) -> Self {
        Self {
            model,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> Widget for InputView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Question")
            .border_style(Style::default().fg(focus_color(self.focused)));
        let inner = block.inner(area);
        block.render(area, buf);

        let label = format!("[{}]", self.model.button_label);
        let chunks = Layout::horizontal([
            Constraint::Min(10),
            Constraint::Length(label.chars().count() as u16 + 1),
        ])
        .split(inner);

        let text = if self.model.question.is_empty() {
            Line::from(Span::styled(
                self.model.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut spans = vec![Span::raw(self.model.question.as_str())];
            if self.focused {
                spans.push(Span::styled(
                    "_",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        // Keep the end of a long question visible.
        let overflow = (self.model.question.chars().count() + 1)
            .saturating_sub(chunks[0].width as usize);
        Paragraph::new(text)
            .scroll((0, overflow.min(u16::MAX as usize) as u16))
            .render(chunks[0], buf);

        let label_style = if self.model.submit_enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Indexed(63))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(Line::from(Span::styled(label, label_style))).render(chunks[1], buf);
    }
}
