//! Scrollbar shared by the sidebar and the page content area.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollbar state plus the consistent styling every scrollable region uses
#[derive(Debug, Default)]
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the scrollbar with the content length (rows or items), the
    /// current offset and, when known, how many fit on screen.
    pub fn update_state(&mut self, total: usize, position: usize, viewport_height: Option<usize>) {
        self.state = self.state.content_length(total).position(position);

        if let Some(height) = viewport_height {
            self.state = self.state.viewport_content_length(height);
        }
    }

    pub fn needs_scrollbar(total: usize, available_height: usize) -> bool {
        total > available_height
    }

    /// Split a bordered area into content and a scrollbar column inside the
    /// right border. Returns `None` for the scrollbar when everything fits.
    pub fn calculate_areas(rect: Rect, total: usize) -> (Rect, Option<Rect>) {
        let available_height = rect.height.saturating_sub(2) as usize;

        if Self::needs_scrollbar(total, available_height) {
            let content_area = Rect {
                width: rect.width.saturating_sub(1),
                ..rect
            };
            let scrollbar_area = Rect {
                x: rect.x + rect.width.saturating_sub(1),
                y: rect.y + 1,
                width: 1,
                height: rect.height.saturating_sub(2),
            };
            (content_area, Some(scrollbar_area))
        } else {
            (rect, None)
        }
    }

    /// Same as [`calculate_areas`](Self::calculate_areas) for regions drawn
    /// without a border, where `total` counts rows.
    pub fn calculate_borderless_areas(rect: Rect, total: usize) -> (Rect, Option<Rect>) {
        if Self::needs_scrollbar(total, rect.height as usize) {
            let content_area = Rect {
                width: rect.width.saturating_sub(1),
                ..rect
            };
            let scrollbar_area = Rect {
                x: rect.x + rect.width.saturating_sub(1),
                width: 1,
                ..rect
            };
            (content_area, Some(scrollbar_area))
        } else {
            (rect, None)
        }
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
