use clinids::icons::*;
use clinids::ui::core::Page;

const THEMES: [IconTheme; 3] = [IconTheme::Ascii, IconTheme::Unicode, IconTheme::Emoji];

#[test]
fn test_default_theme() {
    let service = IconService::default();
    assert_eq!(service.theme(), IconTheme::Unicode);
}

#[test]
fn test_unicode_icons() {
    let service = IconService::new(IconTheme::Unicode);
    assert_eq!(service.check(), "✓");
    assert_eq!(service.clear(), "✕");
    assert_eq!(service.chevrons_up_down(), "⇕");
}

#[test]
fn test_ascii_icons() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.check(), "x");
    assert_eq!(service.sparkles(), "*");
    assert!(service.icons().control.spinner.iter().all(|frame| frame.is_ascii()));
}

#[test]
fn test_every_theme_has_glyphs() {
    for theme in THEMES {
        let service = IconService::new(theme);
        for glyph in [
            service.check(),
            service.clear(),
            service.search(),
            service.info(),
            service.warning(),
            service.error(),
            service.success(),
        ] {
            assert!(!glyph.is_empty(), "{theme:?} is missing a glyph");
        }
        assert!(!service.icons().control.spinner.is_empty());
    }
}

#[test]
fn test_every_page_has_an_icon() {
    for theme in THEMES {
        let service = IconService::new(theme);
        for page in Page::ALL {
            assert!(!page.icon(&service).is_empty(), "{page:?} has no {theme:?} icon");
        }
    }
}

#[test]
fn test_theme_deserializes_lowercase() {
    let theme: IconTheme = serde_json::from_str("\"emoji\"").unwrap();
    assert_eq!(theme, IconTheme::Emoji);
}
