//! Modal dialogs: help, logs, info, error and confirmation.
//!
//! The component owns whichever dialog is open and swallows every event
//! while one is shown, so pages underneath never see input meant for it.

use crate::ui::components::dialogs::{self, scroll_behavior::DialogScroll, ConfirmContent};
use crate::ui::core::{actions::Action, AppContext, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    Frame,
};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    ctx: AppContext,
    // Scrolling support for long content dialogs
    scroll: DialogScroll,
    /// Confirm dialogs start with the cancel button focused
    confirm_focused: bool,
    buttons: Option<(Rect, Rect)>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new(&AppContext::default())
    }
}

impl DialogComponent {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            dialog_type: None,
            ctx: ctx.clone(),
            scroll: DialogScroll::default(),
            confirm_focused: false,
            buttons: None,
        }
    }

    pub fn set_context(&mut self, ctx: &AppContext) {
        self.ctx = ctx.clone();
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll.reset();
        self.confirm_focused = false;
        self.buttons = None;
    }

    fn scroll_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.top(),
            KeyCode::End => self.scroll.bottom(),
            _ => return false,
        }
        true
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Action::ConfirmResolved(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::ConfirmResolved(false),
            KeyCode::Enter | KeyCode::Char(' ') => Action::ConfirmResolved(self.confirm_focused),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.confirm_focused = !self.confirm_focused;
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::Confirm { .. }) => self.handle_confirm_key(key),
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => {
                if self.scroll_keys(key) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            Some(DialogType::Help) | Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Action::HideDialog,
                KeyCode::Char('?') if matches!(self.dialog_type, Some(DialogType::Help)) => Action::HideDialog,
                KeyCode::Char('G') if matches!(self.dialog_type, Some(DialogType::Logs)) => Action::HideDialog,
                _ => {
                    self.scroll_keys(key);
                    Action::None
                }
            },
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog_type.is_none() {
            return Action::None;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.scroll.up();
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.scroll.down();
                Action::None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse.column, mouse.row);
                match self.buttons {
                    Some((cancel, _)) if cancel.contains(position) => Action::ConfirmResolved(false),
                    Some((_, confirm)) if confirm.contains(position) => Action::ConfirmResolved(true),
                    _ => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            // The page that asked for confirmation still needs the answer
            Action::ConfirmResolved(_) => {
                self.clear_dialog();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };
        let scroll = &mut self.scroll;
        match dialog_type {
            DialogType::Help => dialogs::render_help_dialog(f, rect, &self.ctx, scroll),
            DialogType::Logs => dialogs::render_logs_dialog(f, rect, &self.ctx, scroll),
            DialogType::Info(message) => dialogs::render_info_dialog(f, rect, &self.ctx, &message, scroll),
            DialogType::Error(message) => dialogs::render_error_dialog(f, rect, &self.ctx, &message, scroll),
            DialogType::Confirm {
                title,
                description,
                cancel_label,
                confirm_label,
            } => {
                let content = ConfirmContent {
                    title: &title,
                    description: &description,
                    cancel_label: &cancel_label,
                    confirm_label: &confirm_label,
                    confirm_focused: self.confirm_focused,
                };
                self.buttons = Some(dialogs::render_confirm_dialog(f, rect, &self.ctx, &content));
            }
        }
    }
}
