//! Page footer with the copyright line and documentation links.
//!
//! Links are rendered as text only.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::core::AppContext;

pub struct Footer;

impl Footer {
    pub fn render(f: &mut Frame, area: Rect, ctx: &AppContext) {
        let t = &ctx.t().footer;
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let link = Style::default().fg(Color::Gray).add_modifier(Modifier::UNDERLINED);
        let separator = Span::styled("  ·  ", Style::default().fg(Color::DarkGray));
        let links = Line::from(vec![
            Span::styled(t.docs, link),
            separator.clone(),
            Span::styled(t.support, link),
            separator,
            Span::styled(t.changelog, link),
        ]);
        let copy = Line::from(Span::styled(t.copy, Style::default().fg(Color::DarkGray)));

        f.render_widget(Paragraph::new(vec![copy, links]).alignment(Alignment::Center), inner);
    }
}
