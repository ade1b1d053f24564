//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};

/// Screen regions of the documentation shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellAreas {
    pub sidebar: Option<Rect>,
    pub header: Rect,
    pub content: Rect,
    pub footer: Option<Rect>,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into sidebar, header, content, footer and status bar.
    ///
    /// `sidebar_width` of zero hides the sidebar. The footer is dropped when
    /// hidden or when the screen is too short to leave room for content.
    #[must_use]
    pub fn shell_layout(area: Rect, sidebar_width: u16, show_footer: bool) -> ShellAreas {
        let status = Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, area.height.min(1));
        let body = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));

        let sidebar_width = sidebar_width.min(body.width / 2);
        let (sidebar, main) = if sidebar_width == 0 {
            (None, body)
        } else {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
                .split(body);
            (Some(columns[0]), columns[1])
        };

        let footer_height = if show_footer && main.height >= HEADER_HEIGHT + FOOTER_HEIGHT + 6 {
            FOOTER_HEIGHT
        } else {
            0
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(footer_height),
            ])
            .split(main);

        ShellAreas {
            sidebar,
            header: rows[0],
            content: rows[1],
            footer: (footer_height > 0).then_some(rows[2]),
            status,
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Help panel width in percent, wider on narrow screens
    #[must_use]
    pub fn help_panel_width(screen_width: u16) -> u16 {
        if screen_width < 80 {
            90
        } else {
            60
        }
    }
}
