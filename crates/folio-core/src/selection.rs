//! Selection state: the single source of truth for what the UI shows.
//!
//! One top-level view is active at all times, and up to three overlay
//! slots (project detail, certificate detail, image preview) may hold a
//! selection. All transitions are total: any view can follow any view,
//! any slot can be set or cleared at any time, and nothing here can fail.

use serde::{Deserialize, Serialize};

use crate::domain::{Certificate, ImageRef, ProjectId};

/// Top-level content region. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    #[default]
    Profile,
    Projects,
    Certificates,
    Learning,
    Contact,
}

impl ViewId {
    /// All views in menu order
    pub const ALL: [ViewId; 5] = [
        ViewId::Profile,
        ViewId::Projects,
        ViewId::Certificates,
        ViewId::Learning,
        ViewId::Contact,
    ];

    /// Menu label for this view
    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Profile => "Profile",
            ViewId::Projects => "Projects",
            ViewId::Certificates => "Certificates",
            ViewId::Learning => "Learning",
            ViewId::Contact => "Contact",
        }
    }

    /// Next view in menu order, wrapping around
    pub fn next(&self) -> ViewId {
        let idx = Self::ALL.iter().position(|v| v == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous view in menu order, wrapping around
    pub fn previous(&self) -> ViewId {
        let idx = Self::ALL.iter().position(|v| v == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Kind of overlay surface currently on top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Project,
    Certificate,
    Image,
}

/// Mutable UI selection: active view plus three independent overlay slots.
///
/// The slots are not mutually exclusive. The image preview opens on top of
/// the project detail surface in normal use, so the model keeps all three
/// and [`SelectionState::overlay`] reports the topmost one (image over
/// certificate over project, matching the original stacking order).
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    active_view: ViewId,
    selected_project: Option<ProjectId>,
    selected_certificate: Option<Certificate>,
    selected_image: Option<ImageRef>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    /// Switch the active view. Total: no guards, no overlay clearing.
    pub fn set_active_view(&mut self, view: ViewId) {
        self.active_view = view;
    }

    pub fn selected_project(&self) -> Option<&ProjectId> {
        self.selected_project.as_ref()
    }

    /// Set or clear the project detail slot. `None` is the close operation.
    pub fn select_project(&mut self, project: Option<ProjectId>) {
        self.selected_project = project;
    }

    pub fn selected_certificate(&self) -> Option<&Certificate> {
        self.selected_certificate.as_ref()
    }

    pub fn select_certificate(&mut self, certificate: Option<Certificate>) {
        self.selected_certificate = certificate;
    }

    pub fn selected_image(&self) -> Option<&ImageRef> {
        self.selected_image.as_ref()
    }

    pub fn select_image(&mut self, image: Option<ImageRef>) {
        self.selected_image = image;
    }

    /// Topmost open overlay, if any
    pub fn overlay(&self) -> Option<OverlayKind> {
        if self.selected_image.is_some() {
            Some(OverlayKind::Image)
        } else if self.selected_certificate.is_some() {
            Some(OverlayKind::Certificate)
        } else if self.selected_project.is_some() {
            Some(OverlayKind::Project)
        } else {
            None
        }
    }

    /// Close the topmost overlay. Returns true if one was open.
    pub fn close_top_overlay(&mut self) -> bool {
        match self.overlay() {
            Some(OverlayKind::Image) => {
                self.selected_image = None;
                true
            }
            Some(OverlayKind::Certificate) => {
                self.selected_certificate = None;
                true
            }
            Some(OverlayKind::Project) => {
                self.selected_project = None;
                true
            }
            None => false,
        }
    }
}
