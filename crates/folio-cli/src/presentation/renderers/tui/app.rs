//! Application state and key routing.
//!
//! `AppState` is the single mutable record behind the whole UI: the
//! content catalog (read-only after load), the selection state, the
//! transient narrow-layout menu flag, and the scroll cursors of the
//! stateful list components. The event loop owns it exclusively; views
//! only ever see shared references to the parts they draw.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{Catalog, SelectionState, ViewId};

use crate::presentation::views::tui::components::{
    CertificateAction, CertificateListComponent, NavAction, NavComponent, ProjectAction,
    ProjectListComponent,
};

pub struct AppState {
    pub catalog: Catalog,
    pub selection: SelectionState,
    /// Narrow-layout menu visibility. Presentation-only, deliberately
    /// outside SelectionState.
    pub menu_open: bool,
    /// Updated from the frame width on every draw
    pub narrow: bool,
    pub nav: NavComponent,
    pub projects: ProjectListComponent,
    pub certificates: CertificateListComponent,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(),
            menu_open: false,
            narrow: false,
            nav: NavComponent::new(),
            projects: ProjectListComponent::new(),
            certificates: CertificateListComponent::new(),
            should_quit: false,
        }
    }

    /// Switch the active view and close the transient menu
    pub fn activate_view(&mut self, view: ViewId) {
        self.selection.set_active_view(view);
        self.nav.sync_to(view);
        self.menu_open = false;
    }

    /// Route one key press. Precedence: overlay, narrow menu, globals,
    /// then the active view's component.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.selection.overlay().is_some() {
            self.handle_overlay_key(key);
            return;
        }

        if self.narrow && self.menu_open {
            self.handle_menu_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('m') if self.narrow => {
                self.menu_open = true;
                return;
            }
            KeyCode::Tab => {
                self.activate_view(self.selection.active_view().next());
                return;
            }
            KeyCode::BackTab => {
                self.activate_view(self.selection.active_view().previous());
                return;
            }
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.activate_view(ViewId::ALL[idx]);
                return;
            }
            _ => {}
        }

        match self.selection.active_view() {
            ViewId::Projects => {
                if let Some(action) = self.projects.handle_input(key, &self.catalog.projects) {
                    match action {
                        ProjectAction::OpenDetails(id) => self.selection.select_project(Some(id)),
                        ProjectAction::OpenImage(image) => self.selection.select_image(Some(image)),
                    }
                }
            }
            ViewId::Certificates => {
                if let Some(CertificateAction::ShowDetails(idx)) = self
                    .certificates
                    .handle_input(key, self.catalog.certificates.len())
                {
                    let certificate = self.catalog.certificates.get(idx).cloned();
                    self.selection.select_certificate(certificate);
                }
            }
            ViewId::Profile | ViewId::Learning | ViewId::Contact => {
                if !self.narrow {
                    if let Some(NavAction::Activate(view)) = self.nav.handle_input(key) {
                        self.activate_view(view);
                    }
                }
            }
        }
    }

    // Overlay consumes every key; dismissal writes None back into the slot
    fn handle_overlay_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                self.selection.close_top_overlay();
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => {
                self.menu_open = false;
            }
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.activate_view(ViewId::ALL[idx]);
            }
            KeyCode::Enter => {
                if let Some(view) = self.nav.cursor_view() {
                    self.activate_view(view);
                }
            }
            _ => {
                self.nav.handle_input(key);
            }
        }
    }
}
