use super::{heading, section, wrap_spans, DocPage, Stack};
use crate::ui::components::badge::{badge, BadgeShape, BadgeVariant};
use crate::ui::core::{AppContext, Page};
use ratatui::{text::Span, widgets::Paragraph, Frame};

pub struct BadgesPage;

fn shape_badges(ctx: &AppContext) -> Vec<Span<'static>> {
    let t = &ctx.t().badges;
    let mut spans: Vec<Span<'static>> = BadgeShape::ALL
        .into_iter()
        .map(|shape| {
            // Circles hold a count
            let text = if shape == BadgeShape::Circle { "3" } else { t.new };
            badge(text, BadgeVariant::Default, shape)
        })
        .collect();
    spans.push(badge(
        &format!("{} {}", ctx.icons.check(), t.verified),
        BadgeVariant::Verified,
        BadgeShape::Pill,
    ));
    spans
}

fn draw_spans(f: &mut Frame, stack: &mut Stack, spans: Vec<Span<'static>>) {
    let lines = wrap_spans(spans, stack.width());
    let height = lines.len() as u16;
    stack.paragraph(f, Paragraph::new(lines), height);
}

impl DocPage for BadgesPage {
    fn page(&self) -> Page {
        Page::Badges
    }

    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext) {
        let t = &ctx.t().badges;
        heading(f, stack, t.title, t.subtitle);

        section(f, stack, t.variants, None);
        let variants = BadgeVariant::ALL
            .into_iter()
            .map(|variant| badge(variant.name(), variant, BadgeShape::Default))
            .collect();
        draw_spans(f, stack, variants);

        section(f, stack, t.shapes, None);
        draw_spans(f, stack, shape_badges(ctx));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_end_with_verified_pill() {
        let ctx = AppContext::default();
        let spans = shape_badges(&ctx);
        assert_eq!(spans.len(), BadgeShape::ALL.len() + 1);
        assert_eq!(spans[3].content, "(3)");
        assert!(spans[4].content.contains(ctx.t().badges.verified));
    }
}
