use super::{heading, DocPage, Stack};
use crate::tokens::{TypeToken, TYPE_SCALE};
use crate::ui::core::{AppContext, Page};
use crate::utils::color::palette;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct TypographyPage;

fn scale_name(token: &TypeToken, ctx: &AppContext) -> &'static str {
    let t = &ctx.t().typography;
    match token.id {
        "h1" => t.h1,
        "h2" => t.h2,
        _ => t.body,
    }
}

/// Headings get an underline on top of their weight so the levels stay apart
fn sample_style(token: &TypeToken) -> Style {
    let style = Style::default().fg(Color::White).add_modifier(token.modifier());
    if token.id == "h1" {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

impl DocPage for TypographyPage {
    fn page(&self) -> Page {
        Page::Typography
    }

    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext) {
        let t = &ctx.t().typography;
        heading(f, stack, t.title, t.subtitle);

        for token in &TYPE_SCALE {
            let label = Line::from(vec![
                Span::styled(scale_name(token, ctx), Style::default().fg(palette("primary"))),
                Span::styled(
                    format!("  {}px / {}", token.size_px, token.weight),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            stack.paragraph(f, Paragraph::new(label), 1);
            if token.id == "body" {
                stack.text(f, t.desc, sample_style(token).fg(Color::Gray));
            } else {
                stack.paragraph(
                    f,
                    Paragraph::new(Span::styled(t.sample_text, sample_style(token))),
                    1,
                );
            }
            stack.gap(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_styles_are_bold() {
        let h1 = sample_style(&TYPE_SCALE[0]);
        let body = sample_style(&TYPE_SCALE[2]);
        assert!(h1.add_modifier.contains(Modifier::BOLD | Modifier::UNDERLINED));
        assert!(!body.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_scale_names_follow_language() {
        let ctx = AppContext::default();
        assert_eq!(scale_name(&TYPE_SCALE[2], &ctx), ctx.t().typography.body);
    }
}
