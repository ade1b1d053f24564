use ratatui::widgets::ScrollbarState;

/// Rows moved by Page Up/Down inside a dialog
const PAGE: usize = 10;

/// Scroll position of a text dialog.
///
/// The upper bound is only known once the dialog has been laid out, so
/// `set_bounds` is called from render and the offset is clamped there.
#[derive(Debug, Default, Clone)]
pub struct DialogScroll {
    offset: usize,
    max: Option<usize>,
    state: ScrollbarState,
}

impl DialogScroll {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn state_mut(&mut self) -> &mut ScrollbarState {
        &mut self.state
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record the laid out text size and clamp the offset to it
    pub fn set_bounds(&mut self, total_lines: usize, visible: usize) {
        let max = total_lines.saturating_sub(visible);
        self.max = Some(max);
        self.offset = self.offset.min(max);
        self.state = self
            .state
            .content_length(total_lines)
            .viewport_content_length(visible)
            .position(self.offset);
    }

    fn move_to(&mut self, offset: usize) {
        self.offset = self.max.map_or(offset, |max| offset.min(max));
        self.state = self.state.position(self.offset);
    }

    pub fn up(&mut self) {
        self.move_to(self.offset.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.move_to(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.move_to(self.offset.saturating_sub(PAGE));
    }

    pub fn page_down(&mut self) {
        self.move_to(self.offset.saturating_add(PAGE));
    }

    pub fn top(&mut self) {
        self.move_to(0);
    }

    pub fn bottom(&mut self) {
        self.move_to(self.max.unwrap_or(usize::MAX));
    }
}
