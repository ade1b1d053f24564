use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::utils::color::palette;
use crate::utils::text::wrapped_height;

/// Rounded panel with a header (title and description) and body text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    /// Highlights the border, used for AI callouts
    pub accent: bool,
    pub icon: Option<&'static str>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn accent(mut self, accent: bool) -> Self {
        self.accent = accent;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn height(&self, width: u16) -> u16 {
        // borders and side padding
        let text_width = width.saturating_sub(4);
        let description = self
            .description
            .as_deref()
            .map_or(0, |text| wrapped_height(text, text_width));
        let content = self
            .content
            .as_deref()
            .map_or(0, |text| wrapped_height(text, text_width) + 1);
        2 + 1 + description + content
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let border = if self.accent { palette("primary") } else { palette("slate-600") };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = Vec::new();
        let mut title = Vec::new();
        if let Some(icon) = self.icon {
            title.push(Span::styled(format!("{icon} "), Style::default().fg(palette("primary"))));
        }
        title.push(Span::styled(
            self.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(title));
        if let Some(description) = &self.description {
            lines.push(Line::from(Span::styled(description.clone(), Style::default().fg(Color::DarkGray))));
        }
        if let Some(content) = &self.content {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(content.clone(), Style::default().fg(Color::Gray))));
        }

        let padded = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), padded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_counts_sections() {
        assert_eq!(Card::new("Title").height(40), 3);
        assert_eq!(Card::new("Title").description("Short").height(40), 4);
        assert_eq!(Card::new("Title").description("Short").content("Body").height(40), 6);
    }
}
