//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::core::{AppContext, Page};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the key hints, with the page title and language on the left
    pub fn render(f: &mut Frame, area: Rect, ctx: &AppContext, page: Page) {
        let t = ctx.t();
        let location = format!(" {} · {} ", page.title(t), ctx.language.code());

        let status_bar = Paragraph::new(Line::from(vec![
            Span::styled(location, Style::default().fg(Color::White)),
            Span::styled(t.status.hints, Style::default().fg(Color::Gray)),
        ]))
        .block(Block::default())
        .alignment(Alignment::Center);

        f.render_widget(status_bar, area);
    }
}
