//! Render-routing tests against a test backend: every view draws its own
//! region, overlays paint on top, and the narrow layout swaps the sidebar
//! for the menu.

use folio::presentation::renderers::tui::{AppState, ui};
use folio_core::{Catalog, ImageRef, ProjectId, ViewId};
use ratatui::{Terminal, backend::TestBackend};

fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut AppState) -> String {
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let mut text = String::new();
    for row in buffer.content.chunks(width) {
        for cell in row {
            text.push_str(cell.symbol());
        }
        text.push('\n');
    }
    text
}

fn app() -> AppState {
    AppState::new(Catalog::builtin().unwrap())
}

#[test]
fn each_view_renders_its_own_region() {
    let mut terminal = terminal(100, 40);
    let mut app = app();

    let cases = [
        (ViewId::Profile, "About Me"),
        (ViewId::Projects, "Projects (5)"),
        (ViewId::Certificates, "Certificates (4)"),
        (ViewId::Learning, "Learning Progress"),
        (ViewId::Contact, "Contact Me"),
    ];

    for (view, expected) in cases {
        app.activate_view(view);
        let screen = draw(&mut terminal, &mut app);
        assert!(
            screen.contains(expected),
            "view {:?} should render {:?}",
            view,
            expected
        );
    }
}

#[test]
fn wide_layout_shows_the_sidebar() {
    let mut terminal = terminal(100, 40);
    let mut app = app();
    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("Irsyad Faruq Ardiansyah"));
    assert!(screen.contains("1 Profile"));
    assert!(screen.contains("5 Contact"));
}

#[test]
fn narrow_layout_hides_the_sidebar_until_the_menu_opens() {
    let mut terminal = terminal(60, 40);
    let mut app = app();
    app.activate_view(ViewId::Projects);

    let screen = draw(&mut terminal, &mut app);
    assert!(!screen.contains("1 Profile"));

    app.menu_open = true;
    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("Menu"));
    assert!(screen.contains("1 Profile"));
}

#[test]
fn project_overlay_paints_over_the_list() {
    let mut terminal = terminal(100, 40);
    let mut app = app();
    app.activate_view(ViewId::Projects);
    app.selection
        .select_project(Some(ProjectId::from("world-layoffs")));

    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("View on GitHub"));
    assert!(screen.contains("https://github.com/dizzy505/world-layoffs"));
}

#[test]
fn image_overlay_paints_on_top_of_everything() {
    let mut terminal = terminal(100, 40);
    let mut app = app();
    app.activate_view(ViewId::Projects);
    app.selection
        .select_project(Some(ProjectId::from("world-layoffs")));
    app.selection
        .select_image(Some(ImageRef::from("/images/world-layoffs.png")));

    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("Preview"));
    assert!(screen.contains("/images/world-layoffs.png"));
}

#[test]
fn gauge_boundaries_render_without_clamping() {
    let document = r#"
        [profile]
        name = "Test"
        about = "About"
        avatar = "/images/a.jpg"

        [[learning]]
        topic = "Started"
        progress = 0

        [[learning]]
        topic = "Finished"
        progress = 100

        [[study_hours]]
        label = "Week 1"
        hours = 5
    "#;
    let catalog = Catalog::from_toml_str(document).unwrap();
    let mut terminal = terminal(100, 40);
    let mut app = AppState::new(catalog);
    app.activate_view(ViewId::Learning);

    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("Started 0%"));
    assert!(screen.contains("Finished 100%"));
}
