//! Contact view: outbound link cards and the closing blurb.

use folio_core::ContactLink;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ContactView<'a> {
    contacts: &'a [ContactLink],
    outro: &'a str,
}

impl<'a> ContactView<'a> {
    pub fn new(contacts: &'a [ContactLink], outro: &'a str) -> Self {
        Self { contacts, outro }
    }
}

impl Widget for ContactView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Contact Me")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for contact in self.contacts {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<10}", contact.label),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(contact.value.clone()),
            ]));
            // Links are opaque strings, shown as-is
            lines.push(Line::from(Span::styled(
                format!("{:<10}{}", "", contact.url.clone()),
                Style::default().add_modifier(Modifier::DIM),
            )));
            lines.push(Line::default());
        }

        if !self.outro.is_empty() {
            lines.push(Line::from(Span::styled(
                "Let's Connect!",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(self.outro.to_string()));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
