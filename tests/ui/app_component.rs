use clinids::i18n::Language;
use clinids::icons::IconService;
use clinids::logger::Logger;
use clinids::ui::app_component::{AppComponent, AppState};
use clinids::ui::core::{AppContext, Component, EventType, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn english_app(page: Page) -> AppComponent {
    let ctx = AppContext::new(Language::En, IconService::default(), Logger::new());
    AppComponent::new(ctx, AppState::default(), page)
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut AppComponent) {
    terminal.draw(|f| app.render(f, f.area())).unwrap();
}

/// Text of one screen row
fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
}

/// Screen position of the first cell of `text`, searching rows top to bottom
fn find(terminal: &Terminal<TestBackend>, text: &str, min_x: u16) -> Option<(u16, u16)> {
    (0..HEIGHT).find_map(|y| {
        let line: Vec<String> = (0..WIDTH)
            .map(|x| terminal.backend().buffer()[(x, y)].symbol().to_string())
            .collect();
        (min_x..WIDTH).find_map(|x| {
            let candidate: String = line[usize::from(x)..].concat();
            candidate.starts_with(text).then_some((x, y))
        })
    })
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn click(app: &mut AppComponent, column: u16, row: u16) {
    app.handle_event(EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

#[test]
fn test_shell_renders_brand_and_status() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut app = english_app(Page::Colors);
    draw(&mut terminal, &mut app);

    let text = screen(&terminal);
    assert!(text.contains("CliniDS"));
    assert!(text.contains("v2.0"));
    assert!(text.contains("#EC6726"));
    assert!(row(&terminal, HEIGHT - 1).contains("Colors"));
}

#[test]
fn test_every_page_renders_in_both_languages() {
    for language in Language::ALL {
        for page in Page::ALL {
            let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
            let ctx = AppContext::new(language, IconService::default(), Logger::new());
            let mut app = AppComponent::new(ctx, AppState::default(), page);
            draw(&mut terminal, &mut app);
            let status = row(&terminal, HEIGHT - 1);
            assert!(
                status.contains(page.title(language.strings())),
                "{page:?} in {language:?}: {status}"
            );
        }
    }
}

#[test]
fn test_sidebar_click_navigates() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut app = english_app(Page::Colors);
    draw(&mut terminal, &mut app);

    let (x, y) = find(&terminal, "Accordion", 0).expect("sidebar entry");
    assert!(x < app.state().sidebar_width);
    click(&mut app, x, y);
    assert_eq!(app.current_page(), Page::Accordion);
}

#[test]
fn test_language_switch_click() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let ctx = AppContext::default();
    let mut app = AppComponent::new(ctx, AppState::default(), Page::Buttons);
    draw(&mut terminal, &mut app);
    assert_eq!(app.context().language, Language::Pt);

    let (x, y) = find(&terminal, " EN ", 40).expect("language switch");
    click(&mut app, x + 1, y);
    assert_eq!(app.context().language, Language::En);

    draw(&mut terminal, &mut app);
    assert!(screen(&terminal).contains("Buttons trigger actions"));
}

#[test]
fn test_page_search_navigates() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut app = english_app(Page::Intro);
    draw(&mut terminal, &mut app);

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "typo");
    draw(&mut terminal, &mut app);
    assert!(screen(&terminal).contains("Typography"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_page(), Page::Typography);
    assert!(!app.is_search_focused());
}

#[test]
fn test_outside_click_closes_page_search() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut app = english_app(Page::Colors);
    press(&mut app, KeyCode::Char('/'));
    draw(&mut terminal, &mut app);
    assert!(screen(&terminal).contains("Type to filter pages"));

    click(&mut app, WIDTH - 5, HEIGHT - 5);
    draw(&mut terminal, &mut app);
    assert!(!screen(&terminal).contains("Type to filter pages"));
    assert_eq!(app.current_page(), Page::Colors);
}

#[test]
fn test_controlled_combobox_echoes_value() {
    // Tall enough that the whole page fits without scrolling
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, 90)).unwrap();
    let mut app = english_app(Page::Combobox);
    draw(&mut terminal, &mut app);
    assert!(screen(&terminal).contains("Selected value"));

    // Basic, grouped, form, error toggle, then the controlled demo
    for _ in 0..5 {
        press(&mut app, KeyCode::Tab);
    }
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    draw(&mut terminal, &mut app);

    let text = screen(&terminal);
    assert!(text.contains("Selected value: orthodontics"), "{text}");
    assert!(app
        .context()
        .logger
        .get_logs()
        .iter()
        .any(|line| line.contains("'controlled' changed")));
}

#[test]
fn test_help_dialog_blocks_global_keys() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut app = AppComponent::new(AppContext::default(), AppState::default(), Page::Intro);
    press(&mut app, KeyCode::Char('?'));
    draw(&mut terminal, &mut app);
    assert!(screen(&terminal).contains(app.context().t().status.help_title));

    // 'l' would switch language without the dialog
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.context().language, Language::Pt);
    press(&mut app, KeyCode::Char('?'));
    assert!(!app.is_dialog_visible());
}

#[test]
fn test_hover_expands_intro_sidebar() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut app = english_app(Page::Intro);
    draw(&mut terminal, &mut app);
    assert!(app.sidebar_collapsed());

    app.handle_event(EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 2,
        row: 10,
        modifiers: KeyModifiers::NONE,
    }));
    assert!(!app.sidebar_collapsed());
}

#[test]
fn test_common_terminal_sizes_render() {
    for (width, height) in [(80, 24), (100, 30)] {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        for page in Page::ALL {
            let mut app = english_app(page);
            draw(&mut terminal, &mut app);
        }
    }
}
