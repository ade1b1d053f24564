use crate::i18n::StatusStrings;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Rounded dialog frame with a bold title in the dialog's colour
pub fn dialog_block(title: String, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(color))
}

/// One key hint at the bottom of a dialog, e.g. `Esc Close`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub color: Color,
    pub label: &'static str,
}

impl KeyHint {
    pub fn close(t: &StatusStrings) -> Self {
        Self { key: "Esc", color: Color::Red, label: t.key_close }
    }

    pub fn ok(t: &StatusStrings) -> Self {
        Self { key: "Enter", color: Color::Green, label: t.key_ok }
    }

    pub fn scroll(t: &StatusStrings) -> Self {
        Self { key: "j/k", color: Color::Cyan, label: t.key_scroll }
    }

    pub fn switch(t: &StatusStrings) -> Self {
        Self { key: "Tab", color: Color::Cyan, label: t.key_switch }
    }

    pub fn confirm(t: &StatusStrings) -> Self {
        Self { key: "y", color: Color::Green, label: t.key_confirm }
    }

    pub fn cancel(t: &StatusStrings) -> Self {
        Self { key: "n", color: Color::Red, label: t.key_cancel }
    }
}

/// Centered hint line, hints separated by bullets
pub fn hints_paragraph(hints: &[KeyHint]) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::Gray)));
        }
        spans.push(Span::styled(
            hint.key,
            Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", hint.label), Style::default().fg(Color::Gray)));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_hints_are_localized_and_separated() {
        let t = &Language::Pt.strings().status;
        let paragraph = hints_paragraph(&[KeyHint::close(t), KeyHint::scroll(t)]);
        let text: String = format!("{paragraph:?}");
        assert!(text.contains("Fechar"));
        assert!(text.contains("Rolar"));
        assert!(text.contains(" • "));
    }
}
