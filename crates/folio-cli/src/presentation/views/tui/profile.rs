//! Profile view: about paragraph, skill groups and work experience.

use folio_core::Profile;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ProfileView<'a> {
    profile: &'a Profile,
}

impl<'a> ProfileView<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }
}

impl Widget for ProfileView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("About Me")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();

        for chunk in self.profile.about.split('\n') {
            lines.push(Line::from(chunk.to_string()));
        }
        lines.push(Line::default());

        lines.push(section_header("Skills"));
        for group in &self.profile.skill_groups {
            lines.push(Line::from(Span::styled(
                group.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            for skill in &group.skills {
                lines.push(Line::from(format!("  • {}", skill)));
            }
        }
        lines.push(Line::default());

        lines.push(section_header("Work Experience"));
        for exp in &self.profile.experience {
            lines.push(Line::from(vec![
                Span::styled(
                    exp.company.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} | {}", exp.period, exp.role),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));
            for duty in &exp.duties {
                lines.push(Line::from(format!("  - {}", duty)));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

fn section_header(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}
