//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Navigation icons, one per page kind
#[derive(Debug, Clone)]
pub struct NavIcons {
    pub dashboard: &'static str,
    pub package: &'static str,
    pub palette: &'static str,
    pub typography: &'static str,
    pub component: &'static str,
}

/// Glyphs used by interactive controls
#[derive(Debug, Clone)]
pub struct ControlIcons {
    pub chevrons_up_down: &'static str,
    pub chevron_down: &'static str,
    pub chevron_right: &'static str,
    pub check: &'static str,
    pub search: &'static str,
    pub clear: &'static str,
    pub menu: &'static str,
    pub spinner: &'static [&'static str],
}

/// Status and decoration icons
#[derive(Debug, Clone)]
pub struct StatusIcons {
    pub info: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub sparkles: &'static str,
    pub github: &'static str,
    pub language: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub nav: NavIcons,
    pub control: ControlIcons,
    pub status: StatusIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            nav: NavIcons {
                dashboard: "📊",
                package: "📦",
                palette: "🎨",
                typography: "🔤",
                component: "🧩",
            },
            control: ControlIcons {
                chevrons_up_down: "↕",
                chevron_down: "🔽",
                chevron_right: "▶️",
                check: "✅",
                search: "🔍",
                clear: "❌",
                menu: "🍔",
                spinner: &["🕐", "🕑", "🕒", "🕓", "🕔", "🕕", "🕖", "🕗"],
            },
            status: StatusIcons {
                info: "💡",
                success: "✅",
                warning: "⚠️",
                error: "❌",
                sparkles: "✨",
                github: "🐙",
                language: "🌐",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            nav: NavIcons {
                dashboard: "▦",
                package: "◫",
                palette: "◐",
                typography: "ᴛ",
                component: "◆",
            },
            control: ControlIcons {
                chevrons_up_down: "⇕",
                chevron_down: "▾",
                chevron_right: "▸",
                check: "✓",
                search: "⌕",
                clear: "✕",
                menu: "☰",
                spinner: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            },
            status: StatusIcons {
                info: "ⓘ",
                success: "✓",
                warning: "⚠",
                error: "✗",
                sparkles: "✦",
                github: "⌥",
                language: "⚑",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            nav: NavIcons {
                dashboard: "#",
                package: "+",
                palette: "*",
                typography: "T",
                component: "@",
            },
            control: ControlIcons {
                chevrons_up_down: "^v",
                chevron_down: "v",
                chevron_right: ">",
                check: "x",
                search: "?",
                clear: "x",
                menu: "=",
                spinner: &["|", "/", "-", "\\"],
            },
            status: StatusIcons {
                info: "i",
                success: "+",
                warning: "!",
                error: "X",
                sparkles: "*",
                github: "gh",
                language: "lang",
            },
        }
    }

    /// Spinner frame for the given tick count
    #[must_use]
    pub fn spinner_frame(&self, tick: usize) -> &'static str {
        let frames = self.icons().control.spinner;
        frames[tick % frames.len()]
    }

    #[must_use]
    pub fn check(&self) -> &'static str {
        self.icons().control.check
    }

    #[must_use]
    pub fn clear(&self) -> &'static str {
        self.icons().control.clear
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().control.search
    }

    #[must_use]
    pub fn chevrons_up_down(&self) -> &'static str {
        self.icons().control.chevrons_up_down
    }

    #[must_use]
    pub fn chevron_down(&self) -> &'static str {
        self.icons().control.chevron_down
    }

    #[must_use]
    pub fn chevron_right(&self) -> &'static str {
        self.icons().control.chevron_right
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().status.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().status.warning
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().status.error
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().status.success
    }

    #[must_use]
    pub fn sparkles(&self) -> &'static str {
        self.icons().status.sparkles
    }
}
