use clinids::i18n::Language;
use clinids::ui::core::actions::{NavSection, Page};

#[test]
fn test_page_walk_wraps_both_ways() {
    assert_eq!(Page::Intro.previous(), Page::Badges);
    assert_eq!(Page::Badges.next(), Page::Intro);

    let mut page = Page::Intro;
    for _ in 0..Page::ALL.len() {
        page = page.next();
    }
    assert_eq!(page, Page::Intro);
}

#[test]
fn test_sections_cover_every_page_once() {
    let pages: Vec<Page> = NavSection::ALL.into_iter().flat_map(|section| section.pages()).collect();
    assert_eq!(pages, Page::ALL.to_vec());
}

#[test]
fn test_unknown_page_resolves_to_intro() {
    assert_eq!(Page::resolve("combobox"), Page::Combobox);
    assert_eq!(Page::resolve("data-table"), Page::Intro);
}

#[test]
fn test_titles_are_translated() {
    let en = Language::En.strings();
    let pt = Language::Pt.strings();
    assert_eq!(Page::Colors.title(en), "Colors");
    assert_ne!(Page::Colors.title(en), Page::Colors.title(pt));
}
