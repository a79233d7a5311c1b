//! Navigation component: the sidebar on wide frames, the full-screen
//! menu on narrow ones. Both present the same five view entries.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{ContactLink, Profile, ViewId};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

/// Actions the nav can emit to the app
#[derive(Debug, Clone)]
pub enum NavAction {
    /// User activated a menu entry
    Activate(ViewId),
}

/// Menu cursor state shared by the sidebar and the narrow menu
pub struct NavComponent {
    state: ListState,
}

impl NavComponent {
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { state }
    }

    /// Move the cursor onto the given view (after digit or Tab activation)
    pub fn sync_to(&mut self, view: ViewId) {
        let idx = ViewId::ALL.iter().position(|v| *v == view).unwrap_or(0);
        self.state.select(Some(idx));
    }

    /// View under the cursor
    pub fn cursor_view(&self) -> Option<ViewId> {
        self.state.selected().map(|i| ViewId::ALL[i % ViewId::ALL.len()])
    }

    /// Handle keyboard input; Enter activates the entry under the cursor
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<NavAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Enter => self.cursor_view().map(NavAction::Activate),
            _ => None,
        }
    }

    /// Wide-layout sidebar: profile header, contact lines, menu entries
    pub fn render_sidebar(
        &mut self,
        f: &mut Frame,
        area: Rect,
        profile: &Profile,
        contacts: &[ContactLink],
        active: ViewId,
    ) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let header_height = 3 + contacts.len().min(4) as u16;
        let chunks =
            Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).split(inner);

        let mut header = vec![
            Line::from(Span::styled(
                profile.name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                profile.avatar.as_str().to_string(),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::default(),
        ];
        for contact in contacts.iter().take(4) {
            header.push(Line::from(Span::styled(
                format!("{} {}", contact.label, contact.value),
                Style::default().fg(Color::DarkGray),
            )));
        }
        f.render_widget(Paragraph::new(header), chunks[0]);

        let list = menu_list(active);
        f.render_stateful_widget(list, chunks[1], &mut self.state);
    }

    /// Narrow-layout menu: paints over the whole body
    pub fn render_menu(&mut self, f: &mut Frame, area: Rect, active: ViewId) {
        f.render_widget(Clear, area);
        let block = Block::default()
            .title("Menu")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let list = menu_list(active);
        f.render_stateful_widget(list, inner, &mut self.state);
    }

    fn next(&mut self) {
        let next = match self.state.selected() {
            Some(i) if i + 1 < ViewId::ALL.len() => i + 1,
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

impl Default for NavComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn menu_list(active: ViewId) -> List<'static> {
    let items: Vec<ListItem> = ViewId::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let style = if *view == active {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{} {}", i + 1, view.label()),
                style,
            )))
        })
        .collect();

    List::new(items)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)))
        .highlight_symbol("▌ ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn cursor_starts_on_profile() {
        let nav = NavComponent::new();
        assert_eq!(nav.cursor_view(), Some(ViewId::Profile));
    }

    #[test]
    fn enter_activates_cursor_entry() {
        let mut nav = NavComponent::new();
        nav.handle_input(key(KeyCode::Char('j')));
        nav.handle_input(key(KeyCode::Char('j')));
        let action = nav.handle_input(key(KeyCode::Enter));
        assert!(matches!(
            action,
            Some(NavAction::Activate(ViewId::Certificates))
        ));
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut nav = NavComponent::new();
        nav.handle_input(key(KeyCode::Char('k')));
        assert_eq!(nav.cursor_view(), Some(ViewId::Profile));
        for _ in 0..10 {
            nav.handle_input(key(KeyCode::Char('j')));
        }
        assert_eq!(nav.cursor_view(), Some(ViewId::Contact));
    }

    #[test]
    fn sync_to_moves_cursor() {
        let mut nav = NavComponent::new();
        nav.sync_to(ViewId::Learning);
        assert_eq!(nav.cursor_view(), Some(ViewId::Learning));
    }
}
