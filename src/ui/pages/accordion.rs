use super::{heading, section, DocPage, FocusRing, Stack};
use crate::ui::components::accordion::{Accordion, AccordionItem, AccordionMode};
use crate::ui::core::{Action, AppContext, Page};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;

fn items(ctx: &AppContext) -> Vec<AccordionItem> {
    ctx.t()
        .accordion
        .items
        .iter()
        .enumerate()
        .map(|(index, (title, body))| AccordionItem::new(format!("item-{}", index + 1), *title, *body))
        .collect()
}

pub struct AccordionPage {
    single: Accordion,
    multiple: Accordion,
    ring: FocusRing,
}

impl AccordionPage {
    pub fn new(ctx: &AppContext) -> Self {
        let single = Accordion::new(AccordionMode::Single, items(ctx));
        let multiple = Accordion::new(AccordionMode::Multiple, items(ctx));
        let ring = FocusRing::new(single.items().len() + multiple.items().len());
        Self { single, multiple, ring }
    }

    /// Accordion and item index for a ring position
    fn locate(&mut self, slot: usize) -> Option<(&mut Accordion, usize)> {
        let first = self.single.items().len();
        if slot < first {
            Some((&mut self.single, slot))
        } else if slot < first + self.multiple.items().len() {
            Some((&mut self.multiple, slot - first))
        } else {
            None
        }
    }

    fn sync_cursors(&mut self) {
        let first = self.single.items().len();
        let current = self.ring.current();
        self.single.set_cursor(current.filter(|slot| *slot < first));
        self.multiple.set_cursor(current.and_then(|slot| slot.checked_sub(first)));
    }

    fn render_accordion(f: &mut Frame, stack: &mut Stack, accordion: &mut Accordion, ctx: &AppContext) {
        let visible = stack.next(accordion.height(stack.width()));
        if accordion.cursor().is_some() {
            stack.mark_focus();
        }
        match visible {
            Some(rect) => accordion.render(f, rect, &ctx.icons),
            None => accordion.hide(),
        }
    }
}

impl DocPage for AccordionPage {
    fn page(&self) -> Page {
        Page::Accordion
    }

    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext) {
        let t = &ctx.t().accordion;
        heading(f, stack, t.title, t.subtitle);

        section(f, stack, t.single, None);
        Self::render_accordion(f, stack, &mut self.single, ctx);
        section(f, stack, t.multiple, None);
        Self::render_accordion(f, stack, &mut self.multiple, ctx);
    }

    fn handle_key_events(&mut self, key: KeyEvent, _ctx: &AppContext) -> Action {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            if let Some((accordion, index)) = self.ring.current().and_then(|slot| self.locate(slot)) {
                accordion.toggle_at(index);
            }
        }
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, _ctx: &AppContext) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let first = self.single.items().len();
        let slot = if let Some(index) = self.single.hit(mouse.column, mouse.row) {
            self.single.toggle_at(index);
            Some(index)
        } else if let Some(index) = self.multiple.hit(mouse.column, mouse.row) {
            self.multiple.toggle_at(index);
            Some(first + index)
        } else {
            None
        };
        if slot.is_some() {
            self.ring.set(slot);
            self.sync_cursors();
        }
        Action::None
    }

    fn set_context(&mut self, ctx: &AppContext) {
        self.single.set_items(items(ctx));
        self.multiple.set_items(items(ctx));
    }

    fn focus_ring(&mut self) -> Option<&mut FocusRing> {
        Some(&mut self.ring)
    }

    fn focus(&self) -> Option<usize> {
        self.ring.current()
    }

    fn on_focus_change(&mut self) {
        self.sync_cursors();
    }

    fn on_hide(&mut self) {
        self.single.hide();
        self.multiple.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_toggles_focused_item() {
        let ctx = AppContext::default();
        let mut page = AccordionPage::new(&ctx);
        page.ring.set(Some(4));
        page.on_focus_change();
        assert_eq!(page.multiple.cursor(), Some(1));
        assert_eq!(page.single.cursor(), None);

        page.handle_key_events(KeyEvent::from(KeyCode::Enter), &ctx);
        assert!(page.multiple.is_open("item-2"));
        assert!(!page.single.is_open("item-2"));
    }

    #[test]
    fn test_single_accordion_closes_previous() {
        let ctx = AppContext::default();
        let mut page = AccordionPage::new(&ctx);
        for slot in [0, 1] {
            page.ring.set(Some(slot));
            page.handle_key_events(KeyEvent::from(KeyCode::Char(' ')), &ctx);
        }
        assert!(!page.single.is_open("item-1"));
        assert!(page.single.is_open("item-2"));
    }

    #[test]
    fn test_language_switch_keeps_open_items() {
        let ctx = AppContext::default();
        let mut page = AccordionPage::new(&ctx);
        page.single.toggle("item-3");
        page.set_context(&AppContext {
            language: crate::i18n::Language::En,
            ..AppContext::default()
        });
        assert!(page.single.is_open("item-3"));
        assert_eq!(page.single.items()[0].title, "Is it accessible?");
    }
}
