//! Certificate list component.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::Certificate;
use ratatui::{Frame, layout::Rect, widgets::ListState};

use crate::presentation::views::tui::CertificatesView;

/// Actions the certificate list can emit to the app
#[derive(Debug, Clone)]
pub enum CertificateAction {
    /// User opened the detail surface for the entry at this index
    ShowDetails(usize),
}

/// Certificate list with encapsulated scroll state
pub struct CertificateListComponent {
    state: ListState,
}

impl CertificateListComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> Option<CertificateAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(data_len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Home => {
                if data_len > 0 {
                    self.state.select(Some(0));
                }
                None
            }
            KeyCode::End => {
                if data_len > 0 {
                    self.state.select(Some(data_len - 1));
                }
                None
            }
            KeyCode::Enter => self.state.selected().map(CertificateAction::ShowDetails),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, certificates: &[Certificate]) {
        // Index safety: clamp selection to data bounds
        if let Some(selected) = self.state.selected() {
            if selected >= certificates.len() && !certificates.is_empty() {
                self.state.select(Some(certificates.len() - 1));
            } else if certificates.is_empty() {
                self.state.select(None);
            }
        }

        let view = CertificatesView::new(certificates);
        let block = view.block();
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_stateful_widget(view.build_list(), inner, &mut self.state);
    }

    fn next(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < data_len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = match self.state.selected() {
            Some(i) if i > 0 => i - 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(prev));
    }
}

impl Default for CertificateListComponent {
    fn default() -> Self {
        Self::new()
    }
}
