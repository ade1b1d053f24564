use super::{heading, DocPage, Stack};
use crate::ui::core::{AppContext, Page};
use crate::utils::color::palette;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows of a bordered one-line code block
const CODE_HEIGHT: u16 = 3;

pub struct InstallPage;

impl DocPage for InstallPage {
    fn page(&self) -> Page {
        Page::Install
    }

    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext) {
        let t = &ctx.t().install;
        heading(f, stack, t.title, t.subtitle);

        for (index, (title, command)) in t.steps.iter().enumerate() {
            let step = Line::from(vec![
                Span::styled(format!("{}. ", index + 1), Style::default().fg(palette("primary"))),
                Span::styled(*title, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            ]);
            stack.paragraph(f, Paragraph::new(step), 1);

            if let Some(rect) = stack.next(CODE_HEIGHT) {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray));
                let code = Line::from(vec![
                    Span::styled("$ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(*command, Style::default().fg(palette("success"))),
                ]);
                f.render_widget(Paragraph::new(code).block(block), rect);
            }
            stack.gap(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, layout::Rect, Terminal};

    #[test]
    fn test_steps_are_numbered_with_commands() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let ctx = AppContext::default();
        let mut total = 0;
        terminal
            .draw(|f| {
                let mut stack = Stack::new(Rect::new(0, 0, 80, 30), 0);
                InstallPage.render(f, &mut stack, &ctx);
                total = stack.total_height();
            })
            .unwrap();
        let text: String = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("1. "));
        assert!(text.contains("$ npm install @clinids/ui"));
        // Each step takes a title row, a code block and a gap
        assert!(total >= 3 * (1 + CODE_HEIGHT + 1));
    }
}
