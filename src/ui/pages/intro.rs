use super::{card_grid, heading, section, DocPage, Stack};
use crate::ui::components::card::Card;
use crate::ui::core::{AppContext, Page};
use ratatui::Frame;

pub struct IntroPage;

impl DocPage for IntroPage {
    fn page(&self) -> Page {
        Page::Intro
    }

    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext) {
        let t = &ctx.t().intro;
        heading(f, stack, t.title, t.subtitle);

        let features = [
            Card::new(t.ai_first_title)
                .description(t.ai_first_desc)
                .icon(ctx.icons.sparkles())
                .accent(true),
            Card::new(t.clinical_precision_title)
                .description(t.clinical_precision_desc)
                .icon(ctx.icons.success()),
        ];
        card_grid(f, stack, &features, 36);

        section(f, stack, t.user_profiles, None);
        let profiles = [
            Card::new(t.dentists).description(t.dentists_desc),
            Card::new(t.secretaries).description(t.secretaries_desc),
            Card::new(t.managers).description(t.managers_desc),
        ];
        card_grid(f, stack, &profiles, 26);

        let suggestion = Card::new(t.ai_suggestion)
            .content(t.ai_suggestion_text)
            .icon(ctx.icons.sparkles())
            .accent(true);
        let full_width = stack.width();
        card_grid(f, stack, &[suggestion], full_width);
    }
}
