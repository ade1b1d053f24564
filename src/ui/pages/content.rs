use super::{build_pages, DocPage, Stack};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, AppContext, Component, Page};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    widgets::Clear,
    Frame,
};

/// Columns of padding left and right of the page
const PADDING_X: u16 = 2;

/// Scrollable area showing the active documentation page
pub struct ContentComponent {
    pages: Vec<Box<dyn DocPage>>,
    current: Page,
    scroll: u16,
    content_height: u16,
    viewport: Rect,
    /// Scroll the focused widget into view on the next render
    follow_focus: bool,
    scrollbar_helper: ScrollbarHelper,
    ctx: AppContext,
}

impl ContentComponent {
    pub fn new(ctx: &AppContext, current: Page) -> Self {
        Self {
            pages: build_pages(ctx),
            current,
            scroll: 0,
            content_height: 0,
            viewport: Rect::default(),
            follow_focus: false,
            scrollbar_helper: ScrollbarHelper::new(),
            ctx: ctx.clone(),
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn page_mut(&mut self) -> Option<&mut Box<dyn DocPage>> {
        let current = self.current;
        self.pages.iter_mut().find(|page| page.page() == current)
    }

    fn page(&self) -> Option<&dyn DocPage> {
        self.pages
            .iter()
            .find(|page| page.page() == self.current)
            .map(|page| page.as_ref())
    }

    pub fn set_context(&mut self, ctx: &AppContext) {
        self.ctx = ctx.clone();
        for page in &mut self.pages {
            page.set_context(ctx);
        }
    }

    pub fn navigate(&mut self, page: Page) {
        if page == self.current {
            return;
        }
        self.blur();
        if let Some(previous) = self.page_mut() {
            previous.on_hide();
        }
        self.current = page;
        self.scroll = 0;
    }

    /// Scroll by `delta` rows, clamped to the page height
    pub fn scroll_by(&mut self, delta: i16) {
        let max = self.max_scroll();
        let next = i32::from(self.scroll) + i32::from(delta);
        self.scroll = u16::try_from(next.clamp(0, i32::from(max))).unwrap_or(0);
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport.height)
    }

    /// Rows moved by Page Up/Down
    pub fn page_step(&self) -> i16 {
        i16::try_from(self.viewport.height.saturating_sub(2).max(1)).unwrap_or(i16::MAX)
    }

    pub fn has_focus(&self) -> bool {
        self.page().and_then(|page| page.focus()).is_some()
    }

    pub fn captures_input(&self) -> bool {
        self.page().is_some_and(|page| page.captures_input())
    }

    /// Drop keyboard focus from the page's widgets
    pub fn blur(&mut self) {
        if let Some(page) = self.page_mut() {
            if let Some(ring) = page.focus_ring() {
                ring.clear();
            }
            page.on_focus_change();
        }
    }

    fn move_focus(&mut self, forward: bool) {
        if let Some(page) = self.page_mut() {
            if let Some(ring) = page.focus_ring() {
                if forward {
                    ring.next();
                } else {
                    ring.previous();
                }
            }
            page.on_focus_change();
        }
        self.follow_focus = true;
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.viewport.contains(Position::new(column, row))
    }

    /// Draw popups of the active page on top of the whole screen
    pub fn render_overlay(&mut self, f: &mut Frame, viewport: Rect) {
        if let Some(page) = self.page_mut() {
            page.render_overlay(f, viewport);
        }
    }

    fn render_page(&mut self, f: &mut Frame, area: Rect) -> Stack {
        let ctx = self.ctx.clone();
        let mut stack = Stack::new(area, self.scroll);
        if let Some(page) = self.page_mut() {
            page.render(f, &mut stack, &ctx);
        }
        stack
    }
}

impl Component for ContentComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let ctx = self.ctx.clone();
        if self.captures_input() {
            return self
                .page_mut()
                .map_or(Action::None, |page| page.handle_key_events(key, &ctx));
        }

        match key.code {
            KeyCode::Tab => {
                self.move_focus(true);
                Action::None
            }
            KeyCode::BackTab => {
                self.move_focus(false);
                Action::None
            }
            // Arrow keys scroll while nothing is focused
            KeyCode::Up | KeyCode::Char('k') if !self.has_focus() => {
                self.scroll_by(-1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') if !self.has_focus() => {
                self.scroll_by(1);
                Action::None
            }
            KeyCode::Home if !self.has_focus() => {
                self.scroll = 0;
                Action::None
            }
            KeyCode::End if !self.has_focus() => {
                self.scroll = self.max_scroll();
                Action::None
            }
            _ => {
                let action = self
                    .page_mut()
                    .map_or(Action::None, |page| page.handle_key_events(key, &ctx));
                self.follow_focus = true;
                action
            }
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let ctx = self.ctx.clone();
        let inside = self.contains(mouse.column, mouse.row);
        if !inside && !self.captures_input() {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown if !self.captures_input() => {
                self.scroll_by(if mouse.kind == MouseEventKind::ScrollUp { -3 } else { 3 });
                Action::None
            }
            _ => self
                .page_mut()
                .map_or(Action::None, |page| page.handle_mouse_events(mouse, &ctx)),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Navigate(page) => {
                self.navigate(page);
                action
            }
            Action::ScrollContent(delta) => {
                self.scroll_by(delta);
                Action::None
            }
            Action::ComboboxChanged { .. } | Action::ConfirmResolved(_) | Action::ButtonPressed(_) => {
                let ctx = self.ctx.clone();
                let follow_up = self
                    .page_mut()
                    .map_or(Action::None, |page| page.update(&action, &ctx));
                match follow_up {
                    Action::None => action,
                    other => other,
                }
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = Rect::new(
            rect.x + PADDING_X,
            rect.y + 1,
            rect.width.saturating_sub(PADDING_X * 2 + 1),
            rect.height.saturating_sub(1),
        );
        self.viewport = area;

        let mut stack = self.render_page(f, area);
        self.content_height = stack.total_height();

        // Clamp after the page shrank (language switch, closed accordion)
        let mut scroll = self.scroll.min(self.max_scroll());
        if self.follow_focus {
            if let Some((top, bottom)) = stack.focus_span() {
                if top < scroll {
                    scroll = top;
                } else if bottom > scroll + area.height {
                    scroll = bottom.saturating_sub(area.height).min(top);
                }
            }
            self.follow_focus = false;
        }
        if scroll != self.scroll {
            self.scroll = scroll;
            f.render_widget(Clear, rect);
            stack = self.render_page(f, area);
            self.content_height = stack.total_height();
        }

        let scrollbar_area = Rect::new(rect.x + rect.width.saturating_sub(1), area.y, 1, area.height);
        let content_height = usize::from(self.content_height);
        let visible = usize::from(area.height);
        if content_height > visible {
            self.scrollbar_helper
                .update_state(content_height.saturating_sub(visible), usize::from(self.scroll), Some(visible));
            self.scrollbar_helper.render(f, Some(scrollbar_area));
        }
    }

    fn poll_pointer(&mut self) {
        if let Some(page) = self.page_mut() {
            page.poll_pointer();
        }
    }

    fn on_blur(&mut self) {
        self.blur();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(content: &mut ContentComponent, height: u16) {
        let mut terminal = Terminal::new(TestBackend::new(80, height)).unwrap();
        terminal.draw(|f| content.render(f, f.area())).unwrap();
    }

    #[test]
    fn test_scroll_is_clamped_to_page() {
        let mut content = ContentComponent::new(&AppContext::default(), Page::Alerts);
        rendered(&mut content, 12);
        content.scroll_by(1000);
        assert!(content.scroll() > 0);
        let max = content.scroll();
        content.scroll_by(5);
        assert_eq!(content.scroll(), max);
        content.scroll_by(-1000);
        assert_eq!(content.scroll(), 0);
    }

    #[test]
    fn test_navigation_resets_scroll() {
        let mut content = ContentComponent::new(&AppContext::default(), Page::Alerts);
        rendered(&mut content, 12);
        content.scroll_by(3);
        content.update(Action::Navigate(Page::Badges));
        assert_eq!(content.current(), Page::Badges);
        assert_eq!(content.scroll(), 0);
    }

    #[test]
    fn test_tab_focuses_first_widget() {
        let mut content = ContentComponent::new(&AppContext::default(), Page::Buttons);
        assert!(!content.has_focus());
        content.handle_key_events(KeyEvent::from(KeyCode::Tab));
        assert!(content.has_focus());
        content.blur();
        assert!(!content.has_focus());
    }
}
