use super::common::{dialog_block, hints_paragraph, KeyHint};
use super::scroll_behavior::DialogScroll;
use crate::ui::core::AppContext;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation},
    Frame,
};

/// Text dialog with an optional scrollbar
struct MessageDialog<'a> {
    title: String,
    message: &'a str,
    color: Color,
    percent_x: u16,
    height: u16,
    hints: [KeyHint; 2],
}

fn dismiss_hints(ctx: &AppContext) -> [KeyHint; 2] {
    let t = &ctx.t().status;
    [KeyHint::ok(t), KeyHint::scroll(t)]
}

fn close_hints(ctx: &AppContext) -> [KeyHint; 2] {
    let t = &ctx.t().status;
    [KeyHint::close(t), KeyHint::scroll(t)]
}

fn render_message_dialog(f: &mut Frame, area: Rect, dialog: MessageDialog, scroll: &mut DialogScroll) {
    let dialog_area = LayoutManager::centered_rect_lines(dialog.percent_x, dialog.height.min(area.height), area);
    f.render_widget(Clear, dialog_area);

    let block = dialog_block(dialog.title, dialog.color);

    let content_area = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = dialog.message.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height as usize;

    scroll.set_bounds(total_lines, visible_height);

    let message_text = if total_lines > visible_height {
        lines
            .iter()
            .skip(scroll.offset())
            .take(visible_height)
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        dialog.message.to_string()
    };

    f.render_widget(block, dialog_area);
    f.render_widget(
        Paragraph::new(message_text).style(Style::default().fg(Color::White)),
        content_area,
    );
    f.render_widget(hints_paragraph(&dialog.hints), instructions_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        let scrollbar_area = Rect::new(
            dialog_area.x + dialog_area.width.saturating_sub(2),
            content_area.y,
            1,
            content_area.height,
        );
        f.render_stateful_widget(scrollbar, scrollbar_area, scroll.state_mut());
    }
}

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    ctx: &AppContext,
    message: &str,
    scroll: &mut DialogScroll,
) {
    let dialog = MessageDialog {
        title: format!(" {} {} ", ctx.icons.info(), ctx.t().status.info_title),
        message,
        color: Color::Blue,
        percent_x: 60,
        height: 9,
        hints: dismiss_hints(ctx),
    };
    render_message_dialog(f, area, dialog, scroll);
}

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    ctx: &AppContext,
    message: &str,
    scroll: &mut DialogScroll,
) {
    let dialog = MessageDialog {
        title: format!(" {} {} ", ctx.icons.warning(), ctx.t().status.error_title),
        message,
        color: Color::Red,
        percent_x: 70,
        height: 12,
        hints: dismiss_hints(ctx),
    };
    render_message_dialog(f, area, dialog, scroll);
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    ctx: &AppContext,
    scroll: &mut DialogScroll,
) {
    let status = &ctx.t().status;
    let dialog = MessageDialog {
        title: format!(" {} ", status.help_title),
        message: status.help_body,
        color: Color::Cyan,
        percent_x: LayoutManager::help_panel_width(area.width),
        height: area.height.saturating_sub(4),
        hints: close_hints(ctx),
    };
    render_message_dialog(f, area, dialog, scroll);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    ctx: &AppContext,
    scroll: &mut DialogScroll,
) {
    let status = &ctx.t().status;
    let logs = ctx.logger.get_logs();
    let message = if logs.is_empty() {
        status.logs_empty.to_string()
    } else {
        logs.join("\n")
    };
    let dialog = MessageDialog {
        title: format!(" {} ({}) ", status.logs_title, logs.len()),
        message: &message,
        color: Color::Yellow,
        percent_x: 80,
        height: area.height.saturating_sub(4),
        hints: close_hints(ctx),
    };
    render_message_dialog(f, area, dialog, scroll);
}
