use super::common::{dialog_block, hints_paragraph, KeyHint};
use crate::ui::components::button::{Button, ButtonVariant};
use crate::ui::core::AppContext;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Copy shown by a confirmation dialog
pub struct ConfirmContent<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub cancel_label: &'a str,
    pub confirm_label: &'a str,
    /// Whether the confirm button holds focus
    pub confirm_focused: bool,
}

/// Draw the dialog and return the (cancel, confirm) button areas
pub fn render_confirm_dialog(f: &mut Frame, area: Rect, ctx: &AppContext, content: &ConfirmContent) -> (Rect, Rect) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = dialog_block(format!(" {} {} ", ctx.icons.warning(), content.title), Color::Yellow);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let text_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), inner.height.saturating_sub(4));
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            content.description.to_string(),
            Style::default().fg(Color::White),
        )))
        .wrap(Wrap { trim: true }),
        text_area,
    );

    let cancel = Button::new(content.cancel_label)
        .variant(ButtonVariant::Outline)
        .focused(!content.confirm_focused);
    let confirm = Button::new(content.confirm_label)
        .variant(ButtonVariant::Danger)
        .focused(content.confirm_focused);

    // Buttons are right aligned, cancel first
    let buttons_y = inner.y + inner.height.saturating_sub(2);
    let confirm_x = (inner.x + inner.width).saturating_sub(confirm.width() + 1);
    let cancel_x = confirm_x.saturating_sub(cancel.width() + 1).max(inner.x);
    let cancel_rect = cancel.render(f, Rect::new(cancel_x, buttons_y, cancel.width(), 1), ctx.spinner());
    let confirm_rect = confirm.render(f, Rect::new(confirm_x, buttons_y, confirm.width(), 1), ctx.spinner());

    let instructions_area = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1);
    let t = &ctx.t().status;
    let hints = [KeyHint::confirm(t), KeyHint::cancel(t), KeyHint::switch(t)];
    f.render_widget(hints_paragraph(&hints), instructions_area);

    (cancel_rect, confirm_rect)
}
