use super::{heading, DocPage, FocusRing, Stack};
use crate::ui::components::button::{Button, ButtonVariant};
use crate::ui::core::{Action, AppContext, DialogType, Page};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    Frame,
};

/// Demo of the confirmation dialog. The dialog itself is drawn by the app;
/// this page only asks for it and shows the answer.
pub struct DialogsPage {
    ring: FocusRing,
    trigger: Option<Rect>,
    last_result: Option<bool>,
}

impl Default for DialogsPage {
    fn default() -> Self {
        Self {
            ring: FocusRing::new(1),
            trigger: None,
            last_result: None,
        }
    }
}

fn open_dialog(ctx: &AppContext) -> Action {
    let t = &ctx.t().dialogs;
    Action::ShowDialog(DialogType::Confirm {
        title: t.dialog_title.to_string(),
        description: t.dialog_desc.to_string(),
        cancel_label: t.cancel.to_string(),
        confirm_label: t.confirm.to_string(),
    })
}

impl DocPage for DialogsPage {
    fn page(&self) -> Page {
        Page::Dialogs
    }

    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext) {
        let t = &ctx.t().dialogs;
        heading(f, stack, t.title, t.subtitle);

        let button = Button::new(t.open)
            .variant(ButtonVariant::Outline)
            .focused(self.ring.is(0));
        self.trigger = stack.next(1).map(|rect| button.render(f, rect, ctx.spinner()));
        if self.ring.is(0) {
            stack.mark_focus();
        }

        if let Some(confirmed) = self.last_result {
            stack.gap(1);
            let (text, color) = if confirmed {
                (t.confirmed, Color::Green)
            } else {
                (t.cancelled, Color::DarkGray)
            };
            stack.text(f, text, Style::default().fg(color));
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent, ctx: &AppContext) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if self.ring.is(0) => open_dialog(ctx),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, ctx: &AppContext) -> Action {
        let on_trigger = self
            .trigger
            .is_some_and(|rect| rect.contains(Position::new(mouse.column, mouse.row)));
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && on_trigger {
            self.ring.set(Some(0));
            return open_dialog(ctx);
        }
        Action::None
    }

    fn update(&mut self, action: &Action, ctx: &AppContext) -> Action {
        let Action::ConfirmResolved(confirmed) = action else {
            return Action::None;
        };
        let t = &ctx.t().dialogs;
        self.last_result = Some(*confirmed);
        ctx.logger
            .log(format!("DIALOGS: confirmation resolved, confirmed={}", confirmed));
        let message = if *confirmed { t.confirmed } else { t.cancelled };
        Action::ShowDialog(DialogType::Info(message.to_string()))
    }

    fn focus_ring(&mut self) -> Option<&mut FocusRing> {
        Some(&mut self.ring)
    }

    fn focus(&self) -> Option<usize> {
        self.ring.current()
    }

    fn on_hide(&mut self) {
        self.trigger = None;
    }
}
