use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::focus_color;
use crate::presentation::view_models::ExampleListItem;

pub struct ExamplesView<'a> {
    items: &'a [ExampleListItem],
    selected: usize,
    focused: bool,
}

impl<'a> ExamplesView<'a> {
    pub fn new(items: &'a [ExampleListItem]) -> Self {
        Self {
            items,
            selected: 0,
            focused: false,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> Widget for ExamplesView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if self.focused && i == self.selected {
                    Line::from(vec![
                        Span::styled("› ", Style::default().fg(Color::Yellow)),
                        Span::styled(
                            item.text.as_str(),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled(item.text.as_str(), Style::default().fg(Color::Gray)),
                    ])
                }
            })
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Try these examples")
                    .border_style(Style::default().fg(focus_color(self.focused))),
            )
            .render(area, buf);
    }
}
