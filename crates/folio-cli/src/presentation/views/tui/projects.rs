//! Projects view: scrollable project cards plus a preview strip line for
//! the selected entry.

use folio_core::Project;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::formatters::{format_position, join_tags, truncate_text};

pub struct ProjectsView<'a> {
    projects: &'a [Project],
}

impl<'a> ProjectsView<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self { projects }
    }

    pub fn block(&self) -> Block<'a> {
        Block::default()
            .title(format!("Projects ({})", self.projects.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
    }

    pub fn build_list(&self) -> List<'a> {
        let items: Vec<ListItem> = self.projects.iter().map(project_card).collect();

        List::new(items)
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)))
            .highlight_symbol("▌ ")
    }

    /// One-line preview strip for the selected project's image cursor
    pub fn preview_line(&self, selected: Option<usize>, image_cursor: usize) -> Line<'a> {
        let Some(project) = selected.and_then(|i| self.projects.get(i)) else {
            return Line::from(Span::styled(
                "select a project to browse previews",
                Style::default().add_modifier(Modifier::DIM),
            ));
        };

        if project.preview_images.is_empty() {
            return Line::from(Span::styled(
                "no previews for this project",
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        let cursor = image_cursor.min(project.preview_images.len() - 1);
        Line::from(vec![
            Span::styled(
                format!(
                    "preview {} ",
                    format_position(cursor, project.preview_images.len())
                ),
                Style::default().fg(Color::Blue),
            ),
            Span::raw(project.preview_images[cursor].as_str().to_string()),
        ])
    }
}

fn project_card(project: &Project) -> ListItem<'_> {
    let mut lines = vec![Line::from(Span::styled(
        project.title.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    if !project.tags.is_empty() {
        lines.push(Line::from(Span::styled(
            join_tags(&project.tags),
            Style::default().fg(Color::Blue),
        )));
    }

    lines.push(Line::from(truncate_text(&project.description, 160)));

    let previews = project.preview_images.len();
    let preview_note = if previews == 0 {
        "no previews".to_string()
    } else {
        format!("{} previews", previews)
    };
    lines.push(Line::from(Span::styled(
        preview_note,
        Style::default().add_modifier(Modifier::DIM),
    )));
    lines.push(Line::default());

    ListItem::new(lines)
}
