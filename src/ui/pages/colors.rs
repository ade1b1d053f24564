use super::{column_count, columns, heading, section, DocPage, Stack};
use crate::tokens::{ColorToken, COLOR_TOKENS};
use crate::ui::core::{AppContext, Page};
use crate::utils::color::palette;
use crate::utils::text::wrapped_height;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Narrowest swatch card before the grid drops to one column
const MIN_SWATCH_WIDTH: u16 = 36;

pub struct ColorsPage;

/// Name row, hex row, optional OKLCH row and the description
fn swatch_height(token: &ColorToken, description: &str, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    2 + u16::from(token.oklch.is_some()) + wrapped_height(description, inner) + 2
}

fn swatch_lines(token: &ColorToken, name: &str, description: &str) -> Vec<Line<'static>> {
    // Tokens are compile-time constants; fall back to the palette entry if one is malformed
    let color = token.color().unwrap_or_else(|_| palette(token.id));
    let mut lines = vec![
        Line::from(vec![
            Span::styled("██████", Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(name.to_string(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(token.hex, Style::default().fg(Color::Gray))),
    ];
    if let Some(oklch) = token.oklch {
        lines.push(Line::from(Span::styled(
            format!("oklch({oklch})"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        description.to_string(),
        Style::default().fg(Color::Gray),
    )));
    lines
}

impl DocPage for ColorsPage {
    fn page(&self) -> Page {
        Page::Colors
    }

    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext) {
        let t = &ctx.t().colors;
        heading(f, stack, t.title, t.subtitle);
        section(f, stack, t.brand_status, None);

        let count = column_count(stack.width(), MIN_SWATCH_WIDTH, 2);
        let cell_width = columns(ratatui::layout::Rect::new(0, 0, stack.width(), 1), count, 2)[0].width;
        for row in COLOR_TOKENS.chunks(usize::from(count)) {
            let height = row
                .iter()
                .map(|token| swatch_height(token, token.copy(ctx.language).1, cell_width))
                .max()
                .unwrap_or(0);
            if let Some(rect) = stack.next(height) {
                for (token, cell) in row.iter().zip(columns(rect, count, 2)) {
                    let (name, description) = token.copy(ctx.language);
                    let block = Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray));
                    let paragraph = Paragraph::new(swatch_lines(token, name, description))
                        .block(block)
                        .wrap(Wrap { trim: true });
                    f.render_widget(paragraph, cell);
                }
            }
            stack.gap(1);
        }
    }
}
