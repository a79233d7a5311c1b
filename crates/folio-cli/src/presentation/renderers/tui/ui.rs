//! Frame layout and view routing.
//!
//! `draw` is the router: it matches the active `ViewId` exhaustively, so
//! an unhandled view is a compile error, not a blank screen.

use folio_core::ViewId;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::app::AppState;
use crate::presentation::views::tui::{
    CertificateOverlay, ContactView, ImageOverlay, LearningView, ProfileView, ProjectOverlay,
};

/// Frames narrower than this drop the sidebar and use the `m` menu
pub const NARROW_BREAKPOINT: u16 = 80;

pub fn draw(f: &mut Frame, app: &mut AppState) {
    app.narrow = f.area().width < NARROW_BREAKPOINT;

    let chunks =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(f.area());
    let body = chunks[0];

    let content = if app.narrow {
        body
    } else {
        let cols =
            Layout::horizontal([Constraint::Length(30), Constraint::Min(0)]).split(body);
        app.nav.render_sidebar(
            f,
            cols[0],
            &app.catalog.profile,
            &app.catalog.contacts,
            app.selection.active_view(),
        );
        cols[1]
    };

    match app.selection.active_view() {
        ViewId::Profile => f.render_widget(ProfileView::new(&app.catalog.profile), content),
        ViewId::Projects => app.projects.render(f, content, &app.catalog.projects),
        ViewId::Certificates => app.certificates.render(f, content, &app.catalog.certificates),
        ViewId::Learning => f.render_widget(
            LearningView::new(&app.catalog.learning, &app.catalog.study_hours),
            content,
        ),
        ViewId::Contact => f.render_widget(
            ContactView::new(&app.catalog.contacts, &app.catalog.outro),
            content,
        ),
    }

    render_footer(f, chunks[1], app);

    if app.narrow && app.menu_open {
        app.nav.render_menu(f, body, app.selection.active_view());
    }

    // Overlays paint bottom-to-top so the topmost slot wins visually
    if let Some(id) = app.selection.selected_project()
        && let Some(project) = app.catalog.project(id)
    {
        f.render_widget(ProjectOverlay::new(project), body);
    }
    if let Some(certificate) = app.selection.selected_certificate() {
        f.render_widget(CertificateOverlay::new(certificate), body);
    }
    if let Some(image) = app.selection.selected_image() {
        f.render_widget(ImageOverlay::new(image), body);
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &AppState) {
    let hint = footer_hint(app);
    let footer = Paragraph::new(Text::from(Line::from(hint)))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(footer, area);
}

fn footer_hint(app: &AppState) -> String {
    if app.selection.overlay().is_some() {
        return "Esc close".to_string();
    }
    if app.narrow && app.menu_open {
        return "j/k move · Enter open · Esc close menu".to_string();
    }

    let nav_hint = if app.narrow {
        "m menu · Tab next view"
    } else {
        "1-5 views · Tab next view"
    };

    match app.selection.active_view() {
        ViewId::Projects => {
            format!("j/k select · Enter links · h/l images · p preview · {nav_hint} · q quit")
        }
        ViewId::Certificates => format!("j/k select · Enter details · {nav_hint} · q quit"),
        ViewId::Profile | ViewId::Learning | ViewId::Contact => {
            if app.narrow {
                format!("{nav_hint} · q quit")
            } else {
                format!("j/k move · Enter open · {nav_hint} · q quit")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Catalog, ImageRef};

    #[test]
    fn footer_hint_follows_state() {
        let mut app = AppState::new(Catalog::builtin().unwrap());
        assert!(footer_hint(&app).contains("1-5 views"));

        app.selection.set_active_view(ViewId::Projects);
        assert!(footer_hint(&app).contains("p preview"));

        app.narrow = true;
        app.menu_open = true;
        assert!(footer_hint(&app).contains("Esc close menu"));

        app.selection.select_image(Some(ImageRef::from("/images/x.png")));
        assert_eq!(footer_hint(&app), "Esc close");
    }
}
