//! Certificates view: scrollable gallery entries.

use folio_core::Certificate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::formatters::truncate_text;

pub struct CertificatesView<'a> {
    certificates: &'a [Certificate],
}

impl<'a> CertificatesView<'a> {
    pub fn new(certificates: &'a [Certificate]) -> Self {
        Self { certificates }
    }

    pub fn block(&self) -> Block<'a> {
        Block::default()
            .title(format!("Certificates ({})", self.certificates.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
    }

    pub fn build_list(&self) -> List<'a> {
        let items: Vec<ListItem> = self.certificates.iter().map(certificate_card).collect();

        List::new(items)
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)))
            .highlight_symbol("▌ ")
    }
}

fn certificate_card(certificate: &Certificate) -> ListItem<'_> {
    let mut lines = vec![
        Line::from(Span::styled(
            certificate.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} | {}", certificate.issuer, certificate.period),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    if let Some(description) = &certificate.description {
        lines.push(Line::from(truncate_text(description, 120)));
    }
    lines.push(Line::default());

    ListItem::new(lines)
}
