use super::{heading, section, DocPage, FocusRing, HitMap, Stack};
use crate::i18n::ButtonStrings;
use crate::icons::IconService;
use crate::ui::components::button::{flow, flow_height, Button, ButtonSize, ButtonVariant};
use crate::ui::components::button_group::{ButtonGroup, Orientation};
use crate::ui::core::{Action, AppContext, Page};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    style::{Color, Style},
    Frame,
};

/// Focus slots after the variant and size rows
const GROUP: usize = 11;
const VERTICAL_GROUP: usize = 12;
const AI: usize = 13;
const FOCUS_SLOTS: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// Index into [`demo_buttons`]
    Button(usize),
    Ai,
}

/// Variant row followed by the size row
fn demo_buttons(t: &ButtonStrings, icons: &IconService) -> Vec<Button> {
    let labels = [t.primary, t.secondary, t.outline, t.ghost, t.danger, t.success, t.link];
    let mut buttons: Vec<Button> = ButtonVariant::ALL
        .into_iter()
        .zip(labels)
        .map(|(variant, label)| Button::new(label).variant(variant))
        .collect();
    let sizes = [t.small, t.medium, t.large];
    buttons.extend(
        ButtonSize::ALL[..3]
            .iter()
            .zip(sizes)
            .map(|(size, label)| Button::new(label).size(*size)),
    );
    let glyph = icons.sparkles();
    buttons.push(Button::new(glyph).icon(glyph).size(ButtonSize::Icon).variant(ButtonVariant::Outline));
    buttons
}

fn ai_button(t: &ButtonStrings, icons: &IconService) -> Button {
    Button::new(t.generate_report).icon(icons.sparkles()).ai_enhanced(true)
}

pub struct ButtonsPage {
    ring: FocusRing,
    group: ButtonGroup,
    vertical_group: ButtonGroup,
    hits: HitMap<Target>,
    last_pressed: Option<String>,
}

impl ButtonsPage {
    pub fn new(ctx: &AppContext) -> Self {
        let items = ctx.t().button.group_items;
        Self {
            ring: FocusRing::new(FOCUS_SLOTS),
            group: ButtonGroup::new(items),
            vertical_group: ButtonGroup::new(items).orientation(Orientation::Vertical),
            hits: HitMap::default(),
            last_pressed: None,
        }
    }

    fn press(&mut self, label: &str) -> Action {
        self.last_pressed = Some(label.to_string());
        Action::ButtonPressed(label.to_string())
    }

    fn group_mut(&mut self, slot: usize) -> Option<&mut ButtonGroup> {
        match slot {
            GROUP => Some(&mut self.group),
            VERTICAL_GROUP => Some(&mut self.vertical_group),
            _ => None,
        }
    }

    /// Press whatever the ring points at
    fn activate(&mut self, ctx: &AppContext) -> Action {
        let t = &ctx.t().button;
        match self.ring.current() {
            Some(AI) => self.press(ai_button(t, &ctx.icons).label()),
            Some(slot @ (GROUP | VERTICAL_GROUP)) => {
                let label = self.group_mut(slot).and_then(|group| {
                    if group.active().is_none() {
                        group.step(1);
                    }
                    group.active_label().map(str::to_string)
                });
                label.map_or(Action::None, |label| self.press(&label))
            }
            Some(index) => {
                let buttons = demo_buttons(t, &ctx.icons);
                match buttons.get(index) {
                    Some(button) => self.press(button.label()),
                    None => Action::None,
                }
            }
            None => Action::None,
        }
    }

    fn render_row(&mut self, f: &mut Frame, stack: &mut Stack, buttons: &[Button], first: usize, spinner: &str) {
        let height = flow_height(buttons, stack.width());
        let visible = stack.next(height);
        if (first..first + buttons.len()).any(|index| self.ring.is(index)) {
            stack.mark_focus();
        }
        let Some(rect) = visible else {
            return;
        };
        for (offset, (button, cell)) in buttons.iter().zip(flow(buttons, rect)).enumerate() {
            let index = first + offset;
            let button = button.clone().focused(self.ring.is(index));
            let used = button.render(f, cell, spinner);
            self.hits.push(used, Target::Button(index));
        }
    }

    fn render_group(f: &mut Frame, stack: &mut Stack, group: &mut ButtonGroup, focused: bool) {
        group.set_focused(focused);
        let visible = stack.next(group.height());
        if focused {
            stack.mark_focus();
        }
        match visible {
            Some(rect) => group.render(f, rect),
            None => group.hide(),
        }
    }
}

impl DocPage for ButtonsPage {
    fn page(&self) -> Page {
        Page::Buttons
    }

    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext) {
        let t = &ctx.t().button;
        let spinner = ctx.spinner();
        self.hits.clear();
        heading(f, stack, t.title, t.subtitle);

        let buttons = demo_buttons(t, &ctx.icons);
        let (variants, sizes) = buttons.split_at(ButtonVariant::ALL.len());
        section(f, stack, t.variants, Some(t.variants_desc));
        self.render_row(f, stack, variants, 0, spinner);
        section(f, stack, t.sizes, Some(t.sizes_desc));
        self.render_row(f, stack, sizes, variants.len(), spinner);

        section(f, stack, t.states, Some(t.states_desc));
        let states = [
            Button::new(t.loading).loading(true),
            Button::new(t.disabled).disabled(true),
        ];
        if let Some(rect) = stack.next(flow_height(&states, stack.width())) {
            for (button, cell) in states.iter().zip(flow(&states, rect)) {
                button.render(f, cell, spinner);
            }
        }

        section(f, stack, t.group, Some(t.group_desc));
        Self::render_group(f, stack, &mut self.group, self.ring.is(GROUP));
        stack.gap(1);
        Self::render_group(f, stack, &mut self.vertical_group, self.ring.is(VERTICAL_GROUP));

        section(f, stack, t.ai_enhanced, Some(t.ai_enhanced_desc));
        let ai = ai_button(t, &ctx.icons).focused(self.ring.is(AI));
        let visible = stack.next(1);
        if self.ring.is(AI) {
            stack.mark_focus();
        }
        if let Some(rect) = visible {
            let used = ai.render(f, rect, spinner);
            self.hits.push(used, Target::Ai);
        }

        if let Some(label) = &self.last_pressed {
            stack.gap(1);
            stack.text(f, &format!("{}: {}", t.pressed, label), Style::default().fg(Color::DarkGray));
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent, ctx: &AppContext) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(ctx),
            KeyCode::Left | KeyCode::Up | KeyCode::Right | KeyCode::Down => {
                let delta = if matches!(key.code, KeyCode::Left | KeyCode::Up) { -1 } else { 1 };
                let Some(slot) = self.ring.current() else {
                    return Action::None;
                };
                let label = self.group_mut(slot).and_then(|group| {
                    group.step(delta);
                    group.active_label().map(str::to_string)
                });
                label.map_or(Action::None, |label| self.press(&label))
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, ctx: &AppContext) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let t = &ctx.t().button;
        match self.hits.hit(mouse.column, mouse.row) {
            Some(Target::Button(index)) => {
                self.ring.set(Some(index));
                return demo_buttons(t, &ctx.icons)
                    .get(index)
                    .map_or(Action::None, |button| {
                        let label = button.label().to_string();
                        self.press(&label)
                    });
            }
            Some(Target::Ai) => {
                self.ring.set(Some(AI));
                return self.press(ai_button(t, &ctx.icons).label());
            }
            None => {}
        }
        for slot in [GROUP, VERTICAL_GROUP] {
            let label = self.group_mut(slot).and_then(|group| {
                let index = group.hit(mouse.column, mouse.row)?;
                group.select(index);
                group.active_label().map(str::to_string)
            });
            if let Some(label) = label {
                self.ring.set(Some(slot));
                return self.press(&label);
            }
        }
        Action::None
    }

    fn set_context(&mut self, ctx: &AppContext) {
        let items = ctx.t().button.group_items;
        self.group.set_items(items);
        self.vertical_group.set_items(items);
    }

    fn focus_ring(&mut self) -> Option<&mut FocusRing> {
        Some(&mut self.ring)
    }

    fn focus(&self) -> Option<usize> {
        self.ring.current()
    }

    fn on_hide(&mut self) {
        self.hits.clear();
        self.group.hide();
        self.vertical_group.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, layout::Rect, Terminal};

    fn draw(page: &mut ButtonsPage, ctx: &AppContext) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 80)).unwrap();
        terminal
            .draw(|f| {
                let mut stack = Stack::new(Rect::new(0, 0, 80, 80), 0);
                page.render(f, &mut stack, ctx);
            })
            .unwrap();
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_enter_presses_focused_button() {
        let ctx = AppContext::default();
        let mut page = ButtonsPage::new(&ctx);
        page.ring.next();
        let action = page.handle_key_events(KeyEvent::from(KeyCode::Enter), &ctx);
        assert_eq!(action, Action::ButtonPressed(ctx.t().button.primary.to_string()));
        assert!(draw(&mut page, &ctx).contains(ctx.t().button.pressed));
    }

    #[test]
    fn test_arrows_step_the_group() {
        let ctx = AppContext::default();
        let mut page = ButtonsPage::new(&ctx);
        page.ring.set(Some(GROUP));
        let action = page.handle_key_events(KeyEvent::from(KeyCode::Right), &ctx);
        assert_eq!(action, Action::ButtonPressed(ctx.t().button.group_items[0].to_string()));
        page.handle_key_events(KeyEvent::from(KeyCode::Left), &ctx);
        assert_eq!(page.group.active(), Some(2));
    }

    #[test]
    fn test_click_on_rendered_button() {
        let ctx = AppContext::default();
        let mut page = ButtonsPage::new(&ctx);
        draw(&mut page, &ctx);
        let (rect, target) = page.hits.areas()[0];
        assert_eq!(target, Target::Button(0));
        let action = page.handle_mouse_events(click(rect.x, rect.y), &ctx);
        assert!(matches!(action, Action::ButtonPressed(_)));
        assert_eq!(page.focus(), Some(0));
    }

    #[test]
    fn test_states_are_not_clickable() {
        let ctx = AppContext::default();
        let mut page = ButtonsPage::new(&ctx);
        draw(&mut page, &ctx);
        let targets = page.hits.areas().len();
        // Eleven demo buttons plus the AI action
        assert_eq!(targets, 12);
    }
}
