use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::utils::color::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Destructive,
    Verified,
    Info,
    Warning,
    Success,
    InfoLight,
    WarningLight,
    SuccessLight,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 11] = [
        BadgeVariant::Default,
        BadgeVariant::Secondary,
        BadgeVariant::Outline,
        BadgeVariant::Destructive,
        BadgeVariant::Verified,
        BadgeVariant::Info,
        BadgeVariant::Warning,
        BadgeVariant::Success,
        BadgeVariant::InfoLight,
        BadgeVariant::WarningLight,
        BadgeVariant::SuccessLight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Verified => "verified",
            BadgeVariant::Info => "info",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Success => "success",
            BadgeVariant::InfoLight => "infoLight",
            BadgeVariant::WarningLight => "warningLight",
            BadgeVariant::SuccessLight => "successLight",
        }
    }

    pub fn style(self) -> Style {
        let (bg, fg) = match self {
            BadgeVariant::Default => (Some(palette("primary")), Color::White),
            BadgeVariant::Secondary => (Some(palette("secondary")), palette("foreground")),
            BadgeVariant::Outline => (None, Color::White),
            BadgeVariant::Destructive => (Some(palette("destructive")), Color::White),
            BadgeVariant::Verified => (Some(palette("blue-500")), Color::White),
            BadgeVariant::Info => (Some(palette("info")), Color::White),
            BadgeVariant::Warning => (Some(palette("warning")), Color::Black),
            BadgeVariant::Success => (Some(palette("success")), Color::White),
            BadgeVariant::InfoLight => (Some(palette("blue-100")), palette("blue-700")),
            BadgeVariant::WarningLight => (Some(palette("amber-100")), palette("amber-700")),
            BadgeVariant::SuccessLight => (Some(palette("emerald-100")), palette("emerald-700")),
        };
        let style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
        match bg {
            Some(bg) => style.bg(bg),
            None => style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeShape {
    #[default]
    Default,
    Square,
    Pill,
    Circle,
}

impl BadgeShape {
    pub const ALL: [BadgeShape; 4] = [BadgeShape::Default, BadgeShape::Square, BadgeShape::Pill, BadgeShape::Circle];

    /// Edge glyphs standing in for the rounded corners
    fn edges(self) -> (&'static str, &'static str) {
        match self {
            BadgeShape::Default => ("(", ")"),
            BadgeShape::Square => ("[", "]"),
            BadgeShape::Pill => ("( ", " )"),
            BadgeShape::Circle => ("(", ")"),
        }
    }
}

/// Build a badge span
#[must_use]
pub fn badge(text: &str, variant: BadgeVariant, shape: BadgeShape) -> Span<'static> {
    let (open, close) = shape.edges();
    let body = match shape {
        // Circles fit a short count or a single glyph
        BadgeShape::Circle => text.chars().take(2).collect::<String>(),
        _ => text.to_string(),
    };
    Span::styled(format!("{open}{body}{close}"), variant.style())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_wrap_text() {
        assert_eq!(badge("New", BadgeVariant::Default, BadgeShape::Default).content, "(New)");
        assert_eq!(badge("New", BadgeVariant::Default, BadgeShape::Square).content, "[New]");
        assert_eq!(badge("New", BadgeVariant::Default, BadgeShape::Pill).content, "( New )");
        assert_eq!(badge("128", BadgeVariant::Default, BadgeShape::Circle).content, "(12)");
    }

    #[test]
    fn test_outline_has_no_background() {
        assert_eq!(BadgeVariant::Outline.style().bg, None);
        assert!(BadgeVariant::Warning.style().bg.is_some());
    }
}
