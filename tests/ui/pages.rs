use clinids::i18n::Language;
use clinids::icons::IconService;
use clinids::logger::Logger;
use clinids::ui::core::{Action, AppContext, Component, DialogType, Page};
use clinids::ui::pages::ContentComponent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};

fn english() -> AppContext {
    AppContext::new(Language::En, IconService::default(), Logger::new())
}

fn draw(terminal: &mut Terminal<TestBackend>, content: &mut ContentComponent) -> String {
    terminal.draw(|f| content.render(f, f.area())).unwrap();
    terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_every_page_fits_narrow_and_wide_viewports() {
    for (width, height) in [(40, 20), (200, 60)] {
        for page in Page::ALL {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            let mut content = ContentComponent::new(&english(), page);
            let text = draw(&mut terminal, &mut content);
            assert!(!text.trim().is_empty(), "{page:?} at {width}x{height} drew nothing");
        }
    }
}

#[test]
fn test_colors_page_shows_brand_oklch() {
    let mut terminal = Terminal::new(TestBackend::new(100, 60)).unwrap();
    let mut content = ContentComponent::new(&english(), Page::Colors);
    let text = draw(&mut terminal, &mut content);
    assert!(text.contains("#EC6726"));
    assert!(text.contains("oklch(0.6698 0.1803 42.9750)"));
}

#[test]
fn test_mouse_wheel_scrolls_long_page() {
    let mut terminal = Terminal::new(TestBackend::new(80, 15)).unwrap();
    let mut content = ContentComponent::new(&english(), Page::Combobox);
    draw(&mut terminal, &mut content);

    let wheel = |kind| MouseEvent {
        kind,
        column: 10,
        row: 5,
        modifiers: KeyModifiers::NONE,
    };
    content.handle_mouse_events(wheel(MouseEventKind::ScrollDown));
    assert_eq!(content.scroll(), 3);
    content.handle_mouse_events(wheel(MouseEventKind::ScrollUp));
    assert_eq!(content.scroll(), 0);
}

#[test]
fn test_end_and_home_keys_jump() {
    let mut terminal = Terminal::new(TestBackend::new(80, 15)).unwrap();
    let mut content = ContentComponent::new(&english(), Page::Alerts);
    draw(&mut terminal, &mut content);

    content.handle_key_events(key(KeyCode::End));
    let bottom = content.scroll();
    assert!(bottom > 0);
    content.handle_key_events(key(KeyCode::Down));
    assert_eq!(content.scroll(), bottom);

    content.handle_key_events(key(KeyCode::Home));
    assert_eq!(content.scroll(), 0);
}

#[test]
fn test_tab_scrolls_focused_widget_into_view() {
    let mut terminal = Terminal::new(TestBackend::new(80, 14)).unwrap();
    let mut content = ContentComponent::new(&english(), Page::Combobox);
    draw(&mut terminal, &mut content);
    assert_eq!(content.scroll(), 0);

    for _ in 0..5 {
        content.handle_key_events(key(KeyCode::Tab));
        draw(&mut terminal, &mut content);
    }
    assert!(content.has_focus());
    assert!(content.scroll() > 0);
}

#[test]
fn test_dialog_demo_round_trip() {
    let ctx = english();
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let mut content = ContentComponent::new(&ctx, Page::Dialogs);
    draw(&mut terminal, &mut content);

    content.handle_key_events(key(KeyCode::Tab));
    let action = content.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::ShowDialog(DialogType::Confirm { .. })));

    let follow_up = content.update(Action::ConfirmResolved(true));
    assert_eq!(
        follow_up,
        Action::ShowDialog(DialogType::Info(ctx.t().dialogs.confirmed.to_string()))
    );
    let text = draw(&mut terminal, &mut content);
    assert!(text.contains(ctx.t().dialogs.confirmed));
}

#[test]
fn test_language_switch_relabels_page() {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let mut content = ContentComponent::new(&english(), Page::Buttons);
    let text = draw(&mut terminal, &mut content);
    assert!(text.contains(Language::En.strings().button.title));

    let portuguese = AppContext::new(Language::Pt, IconService::default(), Logger::new());
    content.set_context(&portuguese);
    let text = draw(&mut terminal, &mut content);
    assert!(text.contains(Language::Pt.strings().button.title));
}
