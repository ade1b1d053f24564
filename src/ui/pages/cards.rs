use super::{card_grid, heading, DocPage, Stack};
use crate::ui::components::card::Card;
use crate::ui::core::{AppContext, Page};
use ratatui::Frame;

pub struct CardsPage;

impl DocPage for CardsPage {
    fn page(&self) -> Page {
        Page::Cards
    }

    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext) {
        let t = &ctx.t().card;
        heading(f, stack, t.title, t.subtitle);

        let cards = [
            Card::new(t.card_title).description(t.card_desc).content(t.card_content),
            Card::new(t.card_title)
                .description(t.card_desc)
                .icon(ctx.icons.sparkles())
                .accent(true),
            Card::new(t.card_title).content(t.card_content).icon(ctx.icons.info()),
        ];
        card_grid(f, stack, &cards, 30);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, layout::Rect, Terminal};

    #[test]
    fn test_narrow_width_stacks_cards() {
        let ctx = AppContext::default();
        let mut narrow = 0;
        let mut wide = 0;
        let mut terminal = Terminal::new(TestBackend::new(120, 80)).unwrap();
        terminal
            .draw(|f| {
                let mut stack = Stack::new(Rect::new(0, 0, 40, 80), 0);
                CardsPage.render(f, &mut stack, &ctx);
                narrow = stack.total_height();
                let mut stack = Stack::new(Rect::new(0, 0, 120, 80), 0);
                CardsPage.render(f, &mut stack, &ctx);
                wide = stack.total_height();
            })
            .unwrap();
        assert!(narrow > wide);
    }
}
