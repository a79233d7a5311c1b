//! Project list component: card scrolling plus the per-project image
//! cursor feeding the preview overlay.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{ImageRef, Project, ProjectId};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{ListState, Paragraph},
};

use crate::presentation::views::tui::ProjectsView;

/// Actions the project list can emit to the app
#[derive(Debug, Clone)]
pub enum ProjectAction {
    /// Open the link surface for the selected project
    OpenDetails(ProjectId),
    /// Open the preview surface for the image under the cursor
    OpenImage(ImageRef),
}

/// Project list with encapsulated scroll and image-cursor state
pub struct ProjectListComponent {
    state: ListState,
    /// Cursor into the selected project's preview images; reset when the
    /// selection moves
    image_cursor: usize,
}

impl ProjectListComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            image_cursor: 0,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Handle keyboard input, emitting an action when an overlay should open
    pub fn handle_input(&mut self, key: KeyEvent, projects: &[Project]) -> Option<ProjectAction> {
        let data_len = projects.len();
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
                self.scroll_to_top(data_len);
                None
            }
            KeyCode::End => {
                self.scroll_to_bottom(data_len);
                None
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.image_cursor = self.image_cursor.saturating_sub(1);
                None
            }
            KeyCode::Char('l') | KeyCode::Right => {
                if let Some(project) = self.selected_project(projects) {
                    let last = project.preview_images.len().saturating_sub(1);
                    self.image_cursor = (self.image_cursor + 1).min(last);
                }
                None
            }
            KeyCode::Enter => self
                .selected_project(projects)
                .map(|p| ProjectAction::OpenDetails(p.id.clone())),
            KeyCode::Char('p') => {
                let project = self.selected_project(projects)?;
                project
                    .preview_images
                    .get(self.image_cursor)
                    .cloned()
                    .map(ProjectAction::OpenImage)
            }
            _ => None,
        }
    }

    /// Render the card list and the preview strip line
    pub fn render(&mut self, f: &mut Frame, area: Rect, projects: &[Project]) {
        // Index safety: clamp selection to data bounds
        if let Some(selected) = self.state.selected() {
            if selected >= projects.len() && !projects.is_empty() {
                self.state.select(Some(projects.len() - 1));
            } else if projects.is_empty() {
                self.state.select(None);
            }
        }

        let view = ProjectsView::new(projects);
        let block = view.block();
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);

        f.render_stateful_widget(view.build_list(), chunks[0], &mut self.state);

        let preview = ProjectsView::new(projects).preview_line(self.selected(), self.image_cursor);
        f.render_widget(Paragraph::new(preview), chunks[1]);
    }

    fn selected_project<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        self.state.selected().and_then(|i| projects.get(i))
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
        if self.state.selected() != Some(next) {
            self.image_cursor = 0;
        }
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = match self.state.selected() {
            Some(i) if i > 0 => i - 1,
            Some(i) => i,
            None => 0,
        };
        if self.state.selected() != Some(prev) {
            self.image_cursor = 0;
        }
        self.state.select(Some(prev));
    }

    fn scroll_to_top(&mut self, data_len: usize) {
        if data_len > 0 {
            self.state.select(Some(0));
            self.image_cursor = 0;
        }
    }

    fn scroll_to_bottom(&mut self, data_len: usize) {
        if data_len > 0 {
            self.state.select(Some(data_len - 1));
            self.image_cursor = 0;
        }
    }
}

impl Default for ProjectListComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Catalog;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn projects() -> Vec<Project> {
        Catalog::builtin().unwrap().projects
    }

    #[test]
    fn enter_without_selection_does_nothing() {
        let mut list = ProjectListComponent::new();
        assert!(list.handle_input(key(KeyCode::Enter), &projects()).is_none());
    }

    #[test]
    fn enter_emits_selected_project_id() {
        let projects = projects();
        let mut list = ProjectListComponent::new();
        list.handle_input(key(KeyCode::Char('j')), &projects);
        list.handle_input(key(KeyCode::Char('j')), &projects);
        let action = list.handle_input(key(KeyCode::Enter), &projects);
        match action {
            Some(ProjectAction::OpenDetails(id)) => assert_eq!(id.as_str(), "bike-sales"),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn image_cursor_clamps_and_resets_on_selection_move() {
        let projects = projects();
        let mut list = ProjectListComponent::new();
        list.handle_input(key(KeyCode::Char('j')), &projects);

        // world-layoffs has two previews; the cursor cannot run past them
        for _ in 0..5 {
            list.handle_input(key(KeyCode::Char('l')), &projects);
        }
        match list.handle_input(key(KeyCode::Char('p')), &projects) {
            Some(ProjectAction::OpenImage(image)) => {
                assert_eq!(image.as_str(), "/images/world-layoffs2.png")
            }
            other => panic!("unexpected action: {:?}", other),
        }

        list.handle_input(key(KeyCode::Char('j')), &projects);
        match list.handle_input(key(KeyCode::Char('p')), &projects) {
            Some(ProjectAction::OpenImage(image)) => {
                assert_eq!(image.as_str(), "/images/bike-sales.png")
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn preview_of_project_without_images_emits_nothing() {
        let bare = vec![Project {
            id: ProjectId::from("bare"),
            title: "Bare".to_string(),
            description: String::new(),
            tags: Vec::new(),
            repo_url: String::new(),
            live_url: String::new(),
            preview_images: Vec::new(),
        }];
        let mut list = ProjectListComponent::new();
        list.handle_input(key(KeyCode::Char('j')), &bare);
        assert!(list.handle_input(key(KeyCode::Char('p')), &bare).is_none());
    }

    #[test]
    fn scroll_clamps_at_list_end() {
        let projects = projects();
        let mut list = ProjectListComponent::new();
        list.handle_input(key(KeyCode::End), &projects);
        assert_eq!(list.selected(), Some(projects.len() - 1));
        list.handle_input(key(KeyCode::Char('j')), &projects);
        assert_eq!(list.selected(), Some(projects.len() - 1));
    }
}
