//! TUI views and stateful components.
//!
//! Views are stateless `Widget` implementations over borrowed catalog
//! records: no logic beyond mapping data to ratatui widgets. Components
//! (under `components/`) own scroll state, handle keyboard input and emit
//! actions for the app to apply to the selection.

pub mod certificates;
pub mod components;
pub mod contact;
pub mod learning;
pub mod overlay;
pub mod profile;
pub mod projects;

pub use certificates::CertificatesView;
pub use contact::ContactView;
pub use learning::LearningView;
pub use overlay::{CertificateOverlay, ImageOverlay, ProjectOverlay};
pub use profile::ProfileView;
pub use projects::ProjectsView;

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Color;

/// Centered overlay area as a percentage of the frame
pub(crate) fn overlay_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Gauge color for a completion percentage
pub(crate) fn progress_color(progress: u8) -> Color {
    match progress {
        100 => Color::Green,
        50..=99 => Color::Cyan,
        _ => Color::Yellow,
    }
}
