use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::icons::IconService;
use crate::utils::color::palette;
use crate::utils::text::wrapped_height;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
    Success,
    Info,
    Warning,
}

impl AlertVariant {
    pub const ALL: [AlertVariant; 5] = [
        AlertVariant::Default,
        AlertVariant::Destructive,
        AlertVariant::Success,
        AlertVariant::Info,
        AlertVariant::Warning,
    ];

    fn accent(self) -> Color {
        match self {
            AlertVariant::Default => palette("slate-400"),
            AlertVariant::Destructive => palette("danger"),
            AlertVariant::Success => palette("success"),
            AlertVariant::Info => palette("info"),
            AlertVariant::Warning => palette("warning"),
        }
    }

    fn icon(self, icons: &IconService) -> &'static str {
        match self {
            AlertVariant::Default | AlertVariant::Info => icons.info(),
            AlertVariant::Destructive => icons.error(),
            AlertVariant::Success => icons.success(),
            AlertVariant::Warning => icons.warning(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub variant: AlertVariant,
    pub title: String,
    pub description: String,
    /// Overrides the variant's icon
    pub icon: Option<&'static str>,
}

impl Alert {
    pub fn new(variant: AlertVariant, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant,
            title: title.into(),
            description: description.into(),
            icon: None,
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn height(&self, width: u16) -> u16 {
        let lines = wrapped_height(&self.description, width.saturating_sub(5));
        // borders + title + description
        2 + 1 + lines
    }

    pub fn render(&self, f: &mut Frame, area: Rect, icons: &IconService) {
        let accent = self.variant.accent();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent));
        let inner = block.inner(area);
        f.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let icon = self.icon.unwrap_or_else(|| self.variant.icon(icons));
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {icon} "), Style::default().fg(accent)),
                Span::styled(self.title.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            ])),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );
        f.render_widget(
            Paragraph::new(self.description.as_str())
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Gray)),
            Rect::new(
                inner.x + 3,
                inner.y + 1,
                inner.width.saturating_sub(3),
                inner.height.saturating_sub(1),
            ),
        );
    }
}
