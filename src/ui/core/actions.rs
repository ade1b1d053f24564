use crate::i18n::{Language, Translations};
use crate::icons::IconService;

/// Sidebar sections grouping the documentation pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    GettingStarted,
    Foundations,
    Components,
}

impl NavSection {
    pub const ALL: [NavSection; 3] = [NavSection::GettingStarted, NavSection::Foundations, NavSection::Components];

    #[must_use]
    pub fn title(self, t: &Translations) -> &'static str {
        match self {
            NavSection::GettingStarted => t.nav.getting_started,
            NavSection::Foundations => t.nav.foundations,
            NavSection::Components => t.nav.components,
        }
    }

    /// Pages listed under this section, in navigation order
    pub fn pages(self) -> impl Iterator<Item = Page> {
        Page::ALL.into_iter().filter(move |page| page.section() == self)
    }
}

/// Documentation page currently shown in the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Intro,
    Install,
    Colors,
    Typography,
    Buttons,
    Cards,
    Combobox,
    Accordion,
    Alerts,
    Dialogs,
    Avatars,
    Badges,
}

impl Page {
    pub const ALL: [Page; 12] = [
        Page::Intro,
        Page::Install,
        Page::Colors,
        Page::Typography,
        Page::Buttons,
        Page::Cards,
        Page::Combobox,
        Page::Accordion,
        Page::Alerts,
        Page::Dialogs,
        Page::Avatars,
        Page::Badges,
    ];

    /// Stable identifier used in config files and on the command line
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Page::Intro => "intro",
            Page::Install => "install",
            Page::Colors => "colors",
            Page::Typography => "typography",
            Page::Buttons => "button",
            Page::Cards => "card",
            Page::Combobox => "combobox",
            Page::Accordion => "accordion",
            Page::Alerts => "alerts",
            Page::Dialogs => "dialogs",
            Page::Avatars => "avatars",
            Page::Badges => "badges",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.id() == id)
    }

    /// Like [`Page::from_id`] but unknown ids land on the introduction
    #[must_use]
    pub fn resolve(id: &str) -> Page {
        Page::from_id(id).unwrap_or_default()
    }

    #[must_use]
    pub fn section(self) -> NavSection {
        match self {
            Page::Intro | Page::Install => NavSection::GettingStarted,
            Page::Colors | Page::Typography => NavSection::Foundations,
            _ => NavSection::Components,
        }
    }

    #[must_use]
    pub fn title(self, t: &Translations) -> &'static str {
        match self {
            Page::Intro => t.nav.intro,
            Page::Install => t.nav.install,
            Page::Colors => t.nav.colors,
            Page::Typography => t.nav.typography,
            Page::Buttons => t.nav.button,
            Page::Cards => t.nav.card,
            Page::Combobox => t.nav.combobox,
            Page::Accordion => t.nav.accordion,
            Page::Alerts => t.nav.alerts,
            Page::Dialogs => t.nav.dialogs,
            Page::Avatars => t.nav.avatars,
            Page::Badges => t.nav.badges,
        }
    }

    #[must_use]
    pub fn icon(self, icons: &IconService) -> &'static str {
        let nav = icons.icons().nav;
        match self {
            Page::Intro | Page::Cards => nav.dashboard,
            Page::Install => nav.package,
            Page::Colors => nav.palette,
            Page::Typography => nav.typography,
            _ => nav.component,
        }
    }

    #[must_use]
    pub fn next(self) -> Page {
        let index = Page::ALL.iter().position(|page| *page == self).unwrap_or(0);
        Page::ALL[(index + 1) % Page::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Page {
        let index = Page::ALL.iter().position(|page| *page == self).unwrap_or(0);
        Page::ALL[(index + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(Page),
    NextPage,
    PreviousPage,
    FocusSearch,
    ScrollContent(i16),

    // Shell
    SetLanguage(Language),
    ToggleLanguage,
    ToggleSidebar,
    CycleIconTheme,

    // Widgets
    ComboboxChanged {
        id: &'static str,
        value: Option<String>,
    },
    ButtonPressed(String),
    ConfirmResolved(bool),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    Help,
    Logs,
    Info(String),
    Error(String),
    Confirm {
        title: String,
        description: String,
        cancel_label: String,
        confirm_label: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
    }

    #[test]
    fn test_unknown_page_falls_back_to_intro() {
        assert_eq!(Page::resolve("input"), Page::Intro);
    }

    #[test]
    fn test_next_previous_wrap() {
        assert_eq!(Page::Badges.next(), Page::Intro);
        assert_eq!(Page::Intro.previous(), Page::Badges);
    }

    #[test]
    fn test_sections_cover_every_page() {
        let total: usize = NavSection::ALL.iter().map(|section| section.pages().count()).sum();
        assert_eq!(total, Page::ALL.len());
    }
}
