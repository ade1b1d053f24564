use super::{columns, heading, section, DocPage, FocusRing, Stack};
use crate::i18n::{ComboboxStrings, Language};
use crate::icons::{IconService, IconTheme};
use crate::ui::components::button::{Button, ButtonSize, ButtonVariant};
use crate::ui::components::combobox::{ComboOption, Combobox, ComboboxConfig, Selection};
use crate::ui::core::{Action, AppContext, Component, Page};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Id carried by changes of the caller-owned demo
pub const CONTROLLED_ID: &str = "controlled";

// Focus slots
const BASIC: usize = 0;
const GROUPED: usize = 1;
const FORM: usize = 2;
const TOGGLE_ERROR: usize = 3;
const CONTROLLED: usize = 4;
const FOCUS_SLOTS: usize = 5;

/// Index of every demo combobox in [`ComboboxPage::combos`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Demo {
    Basic,
    Grouped,
    Form,
    Disabled,
    Loading,
    Controlled,
}

impl Demo {
    const ALL: [Demo; 6] = [
        Demo::Basic,
        Demo::Grouped,
        Demo::Form,
        Demo::Disabled,
        Demo::Loading,
        Demo::Controlled,
    ];

    fn slot(self) -> Option<usize> {
        match self {
            Demo::Basic => Some(BASIC),
            Demo::Grouped => Some(GROUPED),
            Demo::Form => Some(FORM),
            Demo::Controlled => Some(CONTROLLED),
            Demo::Disabled | Demo::Loading => None,
        }
    }

    fn from_slot(slot: usize) -> Option<Demo> {
        Demo::ALL.into_iter().find(|demo| demo.slot() == Some(slot))
    }
}

fn specialty_options(t: &ComboboxStrings) -> Vec<ComboOption> {
    t.specialties
        .iter()
        .map(|(value, label)| ComboOption::new(*value, *label))
        .collect()
}

/// Specialties and staff roles in two groups, each with its own marker
fn grouped_options(t: &ComboboxStrings, icons: &IconService) -> Vec<ComboOption> {
    let set = icons.icons();
    let clinical = t.specialties.iter().map(|(value, label)| {
        ComboOption::new(*value, *label)
            .with_icon(set.nav.component)
            .with_group(t.group_clinical)
    });
    let admin = t.roles.iter().map(|(value, label)| {
        ComboOption::new(*value, *label)
            .with_icon(set.nav.package)
            .with_group(t.group_admin)
    });
    clinical.chain(admin).collect()
}

fn base_config(t: &ComboboxStrings) -> ComboboxConfig {
    ComboboxConfig {
        placeholder: t.placeholder.to_string(),
        search_placeholder: t.search_placeholder.to_string(),
        empty_text: t.empty.to_string(),
        loading_text: t.loading.to_string(),
        ..ComboboxConfig::default()
    }
}

pub struct ComboboxPage {
    combos: Vec<Combobox>,
    ring: FocusRing,
    error_shown: bool,
    /// Mirror of the caller-owned value, echoed under the demo
    controlled_value: Option<String>,
    toggle_button: Option<Rect>,
    language: Language,
    icon_theme: IconTheme,
}

impl ComboboxPage {
    pub fn new(ctx: &AppContext) -> Self {
        let t = &ctx.t().combobox;
        let combos = Demo::ALL
            .into_iter()
            .map(|demo| {
                let (options, config, selection) = match demo {
                    Demo::Basic => (specialty_options(t), base_config(t), Selection::owned()),
                    Demo::Grouped => (
                        grouped_options(t, &ctx.icons),
                        ComboboxConfig {
                            clearable: true,
                            placeholder: t.all_specialties.to_string(),
                            ..base_config(t)
                        },
                        Selection::owned(),
                    ),
                    Demo::Form => (
                        specialty_options(t),
                        ComboboxConfig {
                            label: Some(t.field_label.to_string()),
                            helper_text: Some(t.helper.to_string()),
                            ..base_config(t)
                        },
                        Selection::owned(),
                    ),
                    Demo::Disabled => (
                        specialty_options(t),
                        ComboboxConfig {
                            disabled: true,
                            placeholder: t.disabled.to_string(),
                            width: 22,
                            ..base_config(t)
                        },
                        Selection::owned(),
                    ),
                    Demo::Loading => (
                        specialty_options(t),
                        ComboboxConfig {
                            is_loading: true,
                            width: 22,
                            ..base_config(t)
                        },
                        Selection::owned(),
                    ),
                    Demo::Controlled => (
                        specialty_options(t),
                        ComboboxConfig {
                            clearable: true,
                            ..base_config(t)
                        },
                        Selection::external(None, |value| Action::ComboboxChanged {
                            id: CONTROLLED_ID,
                            value,
                        }),
                    ),
                };
                Combobox::new(options, config, selection, ctx)
            })
            .collect();

        Self {
            combos,
            ring: FocusRing::new(FOCUS_SLOTS),
            error_shown: false,
            controlled_value: None,
            toggle_button: None,
            language: ctx.language,
            icon_theme: ctx.icons.theme(),
        }
    }

    fn combo(&self, demo: Demo) -> &Combobox {
        &self.combos[demo as usize]
    }

    fn combo_mut(&mut self, demo: Demo) -> &mut Combobox {
        &mut self.combos[demo as usize]
    }

    fn open_combo(&mut self) -> Option<&mut Combobox> {
        self.combos.iter_mut().find(|combo| combo.is_open())
    }

    fn toggle_error(&mut self, ctx: &AppContext) {
        self.error_shown = !self.error_shown;
        let error = self.error_shown.then(|| ctx.t().combobox.error.to_string());
        self.combo_mut(Demo::Form).set_error(error);
        ctx.logger
            .log(format!("COMBOBOX: form error {}", if self.error_shown { "shown" } else { "hidden" }));
    }

    /// Swap every translated text and option list
    fn relabel(&mut self, ctx: &AppContext) {
        let t = &ctx.t().combobox;
        for demo in Demo::ALL {
            let options = match demo {
                Demo::Grouped => grouped_options(t, &ctx.icons),
                _ => specialty_options(t),
            };
            let placeholder = match demo {
                Demo::Grouped => t.all_specialties,
                Demo::Disabled => t.disabled,
                _ => t.placeholder,
            };
            let combo = self.combo_mut(demo);
            combo.set_options(options);
            combo.set_texts(placeholder, t.search_placeholder, t.empty, t.loading);
        }
        let error = self.error_shown.then(|| t.error.to_string());
        let form = self.combo_mut(Demo::Form);
        form.set_label(Some(t.field_label.to_string()));
        form.set_helper_text(Some(t.helper.to_string()));
        form.set_error(error);
    }

    fn render_combo(f: &mut Frame, stack: &mut Stack, combo: &mut Combobox) {
        let visible = stack.next(combo.height());
        if combo.is_focused() {
            stack.mark_focus();
        }
        match visible {
            Some(rect) => combo.render(f, rect),
            None => combo.hide(),
        }
    }

    fn selected_value_line(&self, t: &ComboboxStrings) -> Line<'static> {
        let value = self.controlled_value.as_deref().unwrap_or(t.nothing_selected);
        Line::from(vec![
            Span::styled(format!("{}: ", t.selected_value), Style::default().fg(Color::DarkGray)),
            Span::styled(value.to_string(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ])
    }
}

impl DocPage for ComboboxPage {
    fn page(&self) -> Page {
        Page::Combobox
    }

    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext) {
        let t = &ctx.t().combobox;
        heading(f, stack, t.title, t.subtitle);

        section(f, stack, t.basic, None);
        Self::render_combo(f, stack, self.combo_mut(Demo::Basic));

        section(f, stack, t.grouped, None);
        Self::render_combo(f, stack, self.combo_mut(Demo::Grouped));

        section(f, stack, t.form, None);
        Self::render_combo(f, stack, self.combo_mut(Demo::Form));
        stack.gap(1);
        let toggle = Button::new(t.toggle_error)
            .variant(ButtonVariant::Outline)
            .size(ButtonSize::Sm)
            .focused(self.ring.is(TOGGLE_ERROR));
        let visible = stack.next(1);
        if self.ring.is(TOGGLE_ERROR) {
            stack.mark_focus();
        }
        self.toggle_button = visible.map(|rect| toggle.render(f, rect, ctx.spinner()));

        section(f, stack, t.states, None);
        let height = self.combo(Demo::Disabled).height().max(self.combo(Demo::Loading).height());
        match stack.next(height) {
            Some(rect) => {
                let cells = columns(rect, 2, 2);
                self.combo_mut(Demo::Disabled).render(f, cells[0]);
                self.combo_mut(Demo::Loading).render(f, cells[1]);
            }
            None => {
                self.combo_mut(Demo::Disabled).hide();
                self.combo_mut(Demo::Loading).hide();
            }
        }

        section(f, stack, t.controlled, None);
        Self::render_combo(f, stack, self.combo_mut(Demo::Controlled));
        stack.paragraph(f, Paragraph::new(self.selected_value_line(t)), 1);
    }

    fn render_overlay(&mut self, f: &mut Frame, viewport: Rect) {
        for combo in &mut self.combos {
            combo.render_popup(f, viewport);
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent, ctx: &AppContext) -> Action {
        if let Some(combo) = self.open_combo() {
            return combo.handle_key_events(key);
        }
        match self.ring.current() {
            Some(TOGGLE_ERROR) if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.toggle_error(ctx);
                Action::None
            }
            Some(slot) => match Demo::from_slot(slot) {
                Some(demo) => self.combo_mut(demo).handle_key_events(key),
                None => Action::None,
            },
            None => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, ctx: &AppContext) -> Action {
        // An open list sees the event first so its rows win over whatever it covers
        if let Some(combo) = self.open_combo() {
            if combo.contains(mouse.column, mouse.row) {
                return combo.handle_mouse_events(mouse);
            }
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        if let Some(demo) = Demo::ALL
            .into_iter()
            .find(|demo| self.combo(*demo).contains(mouse.column, mouse.row))
        {
            if let Some(slot) = demo.slot() {
                self.ring.set(Some(slot));
                self.on_focus_change();
            }
            return self.combo_mut(demo).handle_mouse_events(mouse);
        }

        let on_toggle = self
            .toggle_button
            .is_some_and(|rect| rect.contains(Position::new(mouse.column, mouse.row)));
        if on_toggle {
            self.ring.set(Some(TOGGLE_ERROR));
            self.on_focus_change();
            self.toggle_error(ctx);
        }
        Action::None
    }

    fn update(&mut self, action: &Action, _ctx: &AppContext) -> Action {
        if let Action::ComboboxChanged { id, value } = action {
            if *id == CONTROLLED_ID {
                self.controlled_value = value.clone();
                self.combo_mut(Demo::Controlled).set_value(value.clone());
            }
        }
        Action::None
    }

    fn set_context(&mut self, ctx: &AppContext) {
        for combo in &mut self.combos {
            combo.set_context(ctx);
        }
        if ctx.language != self.language || ctx.icons.theme() != self.icon_theme {
            self.language = ctx.language;
            self.icon_theme = ctx.icons.theme();
            self.relabel(ctx);
        }
    }

    fn focus_ring(&mut self) -> Option<&mut FocusRing> {
        Some(&mut self.ring)
    }

    fn focus(&self) -> Option<usize> {
        self.ring.current()
    }

    fn on_focus_change(&mut self) {
        let current = self.ring.current();
        for demo in Demo::ALL {
            let focused = demo.slot().is_some() && demo.slot() == current;
            let combo = self.combo_mut(demo);
            if focused && !combo.is_focused() {
                combo.on_focus();
            } else if !focused && combo.is_focused() {
                combo.on_blur();
            }
        }
    }

    fn captures_input(&self) -> bool {
        self.combos.iter().any(Combobox::is_open)
    }

    fn poll_pointer(&mut self) {
        for combo in &mut self.combos {
            combo.poll_pointer();
        }
    }

    fn on_hide(&mut self) {
        for combo in &mut self.combos {
            combo.hide();
        }
        self.toggle_button = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(page: &mut ComboboxPage, ctx: &AppContext) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 60)).unwrap();
        terminal
            .draw(|f| {
                let mut stack = Stack::new(Rect::new(0, 0, 80, 60), 0);
                page.render(f, &mut stack, ctx);
                page.render_overlay(f, f.area());
            })
            .unwrap();
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_controlled_change_round_trips_through_update() {
        let ctx = AppContext::default();
        let mut page = ComboboxPage::new(&ctx);
        page.ring.set(Some(CONTROLLED));
        page.on_focus_change();

        page.handle_key_events(key(KeyCode::Enter), &ctx);
        assert!(page.captures_input());
        let action = page.handle_key_events(key(KeyCode::Enter), &ctx);
        let first = ctx.t().combobox.specialties[0].0;
        assert_eq!(
            action,
            Action::ComboboxChanged {
                id: CONTROLLED_ID,
                value: Some(first.to_string()),
            }
        );
        // The widget only shows the value once the owner feeds it back
        assert_eq!(page.combo(Demo::Controlled).value(), None);

        page.update(&action, &ctx);
        assert_eq!(page.combo(Demo::Controlled).value(), Some(first));
        assert!(draw(&mut page, &ctx).contains(first));
    }

    #[test]
    fn test_owned_select_needs_no_round_trip() {
        let ctx = AppContext::default();
        let mut page = ComboboxPage::new(&ctx);
        page.ring.set(Some(BASIC));
        page.on_focus_change();
        page.handle_key_events(key(KeyCode::Enter), &ctx);
        let action = page.handle_key_events(key(KeyCode::Enter), &ctx);
        assert_eq!(action, Action::None);
        assert_eq!(page.combo(Demo::Basic).value(), Some(ctx.t().combobox.specialties[0].0));
    }

    #[test]
    fn test_toggle_error_swaps_helper() {
        let ctx = AppContext::default();
        let mut page = ComboboxPage::new(&ctx);
        page.ring.set(Some(TOGGLE_ERROR));
        page.handle_key_events(key(KeyCode::Char(' ')), &ctx);
        assert_eq!(
            page.combo(Demo::Form).footer_text(),
            Some((ctx.t().combobox.error, true))
        );
        page.handle_key_events(key(KeyCode::Enter), &ctx);
        assert_eq!(
            page.combo(Demo::Form).footer_text(),
            Some((ctx.t().combobox.helper, false))
        );
    }

    #[test]
    fn test_focus_moves_between_comboboxes() {
        let ctx = AppContext::default();
        let mut page = ComboboxPage::new(&ctx);
        page.ring.set(Some(BASIC));
        page.on_focus_change();
        page.handle_key_events(key(KeyCode::Enter), &ctx);
        assert!(page.combo(Demo::Basic).is_open());

        page.ring.set(Some(GROUPED));
        page.on_focus_change();
        assert!(!page.combo(Demo::Basic).is_open());
        assert!(!page.combo(Demo::Basic).is_focused());
        assert!(page.combo(Demo::Grouped).is_focused());
    }

    #[test]
    fn test_language_switch_relabels_options() {
        let ctx = AppContext {
            language: Language::En,
            ..AppContext::default()
        };
        let mut page = ComboboxPage::new(&ctx);
        let pt = AppContext {
            language: Language::Pt,
            ..ctx.clone()
        };
        page.set_context(&pt);
        assert_eq!(
            page.combo(Demo::Basic).options()[0].label,
            pt.t().combobox.specialties[0].1
        );
        assert_eq!(page.combo(Demo::Form).config().label.as_deref(), Some(pt.t().combobox.field_label));
    }

    #[test]
    fn test_disabled_and_loading_are_not_focusable() {
        assert_eq!(Demo::Disabled.slot(), None);
        assert_eq!(Demo::Loading.slot(), None);
        assert_eq!(Demo::from_slot(CONTROLLED), Some(Demo::Controlled));
        assert_eq!(Demo::from_slot(TOGGLE_ERROR), None);
    }
}
