//! Dismissible overlay surfaces.
//!
//! Three instances of the same pattern, parameterized by entity shape:
//! project detail (links), certificate detail, image preview. Each clears
//! the backdrop area first so the surface paints over whatever is below,
//! in the slot stacking order handled by the router.

use folio_core::{Certificate, ImageRef, Project};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::overlay_area;

fn surface_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
}

fn close_hint() -> Line<'static> {
    Line::from(Span::styled(
        "Esc close",
        Style::default().add_modifier(Modifier::DIM),
    ))
}

/// Project detail surface: the two outbound links
pub struct ProjectOverlay<'a> {
    project: &'a Project,
}

impl<'a> ProjectOverlay<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }
}

impl Widget for ProjectOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let surface = overlay_area(area, 60, 40);
        Clear.render(surface, buf);

        let block = surface_block(self.project.title.clone());
        let inner = block.inner(surface);
        block.render(surface, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled("View on GitHub   ", Style::default().fg(Color::Cyan)),
                Span::raw(self.project.repo_url.clone()),
            ]),
            Line::from(vec![
                Span::styled("Visit Live Site  ", Style::default().fg(Color::Blue)),
                Span::raw(self.project.live_url.clone()),
            ]),
            Line::default(),
            close_hint(),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// Certificate detail surface
pub struct CertificateOverlay<'a> {
    certificate: &'a Certificate,
}

impl<'a> CertificateOverlay<'a> {
    pub fn new(certificate: &'a Certificate) -> Self {
        Self { certificate }
    }
}

impl Widget for CertificateOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let surface = overlay_area(area, 70, 50);
        Clear.render(surface, buf);

        let block = surface_block(self.certificate.title.clone());
        let inner = block.inner(surface);
        block.render(surface, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                self.certificate.image.as_str().to_string(),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(format!(
                "{} | {}",
                self.certificate.issuer, self.certificate.period
            )),
        ];

        if let Some(description) = &self.certificate.description {
            lines.push(Line::default());
            lines.push(Line::from(description.clone()));
        }
        lines.push(Line::default());
        lines.push(close_hint());

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// Image preview surface. Image assets are opaque references, so the
/// preview frames the path rather than decoding pixels.
pub struct ImageOverlay<'a> {
    image: &'a ImageRef,
}

impl<'a> ImageOverlay<'a> {
    pub fn new(image: &'a ImageRef) -> Self {
        Self { image }
    }
}

impl Widget for ImageOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let surface = overlay_area(area, 80, 60);
        Clear.render(surface, buf);

        let block = surface_block("Preview".to_string());
        let inner = block.inner(surface);
        block.render(surface, buf);

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.image.as_str().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            close_hint(),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
