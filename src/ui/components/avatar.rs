use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::constants::AVATAR_GROUP_DEFAULT_LIMIT;
use crate::utils::color::palette;
use crate::utils::text::initials;

/// Avatar sizes, named after the web scale (5 through 20)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    S5,
    S6,
    S8,
    #[default]
    S10,
    S12,
    S14,
    S16,
    S20,
}

impl AvatarSize {
    pub const ALL: [AvatarSize; 8] = [
        AvatarSize::S5,
        AvatarSize::S6,
        AvatarSize::S8,
        AvatarSize::S10,
        AvatarSize::S12,
        AvatarSize::S14,
        AvatarSize::S16,
        AvatarSize::S20,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AvatarSize::S5 => "5",
            AvatarSize::S6 => "6",
            AvatarSize::S8 => "8",
            AvatarSize::S10 => "10",
            AvatarSize::S12 => "12",
            AvatarSize::S14 => "14",
            AvatarSize::S16 => "16",
            AvatarSize::S20 => "20",
        }
    }

    /// Blank cells on each side of the initials
    fn padding(self) -> usize {
        match self {
            AvatarSize::S5 | AvatarSize::S6 => 0,
            AvatarSize::S8 | AvatarSize::S10 => 1,
            AvatarSize::S12 | AvatarSize::S14 => 2,
            AvatarSize::S16 => 3,
            AvatarSize::S20 => 4,
        }
    }

    /// Initials turn bold from size 8 up
    fn modifier(self) -> Modifier {
        match self {
            AvatarSize::S5 | AvatarSize::S6 => Modifier::empty(),
            _ => Modifier::BOLD,
        }
    }
}

fn style() -> Style {
    Style::default().bg(palette("slate-100")).fg(palette("slate-600"))
}

/// A circular avatar showing the fallback initials
#[must_use]
pub fn avatar(name: &str, size: AvatarSize) -> Span<'static> {
    let pad = " ".repeat(size.padding());
    let text = initials(name);
    let text = if text.is_empty() { "?".to_string() } else { text };
    Span::styled(
        format!("({pad}{text}{pad})"),
        style().add_modifier(size.modifier()),
    )
}

/// Stacked avatars: the first `limit` people, then `+N` for the rest
#[must_use]
pub fn avatar_group(names: &[&str], limit: Option<usize>, size: AvatarSize) -> Line<'static> {
    let limit = limit.unwrap_or(AVATAR_GROUP_DEFAULT_LIMIT);
    let mut spans: Vec<Span<'static>> = names.iter().take(limit).map(|name| avatar(name, size)).collect();

    let remaining = names.len().saturating_sub(limit);
    if remaining > 0 {
        let pad = " ".repeat(size.padding());
        spans.push(Span::styled(format!("({pad}+{remaining}{pad})"), style()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_fallback_initials_are_uppercase() {
        assert_eq!(avatar("ana costa", AvatarSize::S5).content, "(AC)");
        assert_eq!(avatar("", AvatarSize::S5).content, "(?)");
    }

    #[test]
    fn test_group_collapses_overflow() {
        let names = ["Ana Costa", "Bruno Lima", "Carla Souza", "Diego Alves", "Elisa Rocha"];
        let line = avatar_group(&names, None, AvatarSize::S5);
        assert_eq!(text(&line), "(AC)(BL)(CS)(+2)");
    }

    #[test]
    fn test_group_without_overflow_has_no_counter() {
        let line = avatar_group(&["Ana Costa", "Bruno Lima"], Some(3), AvatarSize::S5);
        assert_eq!(text(&line), "(AC)(BL)");
    }
}
