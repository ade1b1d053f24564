//! Documentation pages and the scrollable content area hosting them.
//!
//! Pages are laid out top to bottom into a [`Stack`], a virtual column that
//! knows the scroll offset and only hands out rectangles for blocks that are
//! on screen. Interactive widgets take part in a per-page [`FocusRing`].

mod accordion;
mod alerts;
mod avatars;
mod badges;
mod buttons;
mod cards;
mod colors;
mod combobox;
mod content;
mod dialogs;
mod install;
mod intro;
mod typography;

pub use content::ContentComponent;

use crate::ui::components::card::Card;
use crate::ui::core::{Action, AppContext, Page};
use crate::utils::color::palette;
use crate::utils::text::wrapped_height;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// A documentation page shown in the content area
pub trait DocPage {
    fn page(&self) -> Page;

    /// Lay the page out into `stack`
    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext);

    /// Draw popups after everything else
    fn render_overlay(&mut self, _f: &mut Frame, _viewport: Rect) {}

    fn handle_key_events(&mut self, _key: KeyEvent, _ctx: &AppContext) -> Action {
        Action::None
    }

    fn handle_mouse_events(&mut self, _mouse: MouseEvent, _ctx: &AppContext) -> Action {
        Action::None
    }

    /// React to an action coming back through the app
    fn update(&mut self, _action: &Action, _ctx: &AppContext) -> Action {
        Action::None
    }

    /// Language, icon theme or tick changed
    fn set_context(&mut self, _ctx: &AppContext) {}

    fn focus_ring(&mut self) -> Option<&mut FocusRing> {
        None
    }

    fn focus(&self) -> Option<usize> {
        None
    }

    /// Called after the content area moved focus
    fn on_focus_change(&mut self) {}

    /// Whether an open popup should receive every key
    fn captures_input(&self) -> bool {
        false
    }

    fn poll_pointer(&mut self) {}

    /// Page left the screen
    fn on_hide(&mut self) {}
}

/// Build every page in navigation order
pub fn build_pages(ctx: &AppContext) -> Vec<Box<dyn DocPage>> {
    Page::ALL
        .into_iter()
        .map(|page| -> Box<dyn DocPage> {
            match page {
                Page::Intro => Box::new(intro::IntroPage),
                Page::Install => Box::new(install::InstallPage),
                Page::Colors => Box::new(colors::ColorsPage),
                Page::Typography => Box::new(typography::TypographyPage),
                Page::Buttons => Box::new(buttons::ButtonsPage::new(ctx)),
                Page::Cards => Box::new(cards::CardsPage),
                Page::Combobox => Box::new(combobox::ComboboxPage::new(ctx)),
                Page::Accordion => Box::new(accordion::AccordionPage::new(ctx)),
                Page::Alerts => Box::new(alerts::AlertsPage),
                Page::Dialogs => Box::new(dialogs::DialogsPage::default()),
                Page::Avatars => Box::new(avatars::AvatarsPage),
                Page::Badges => Box::new(badges::BadgesPage),
            }
        })
        .collect()
}

/// Virtual vertical layout over the visible content area.
///
/// Blocks are allocated in page order; `next` returns a screen rectangle only
/// when the whole block is visible so widgets never record clipped hit areas.
#[derive(Debug, Clone)]
pub struct Stack {
    area: Rect,
    offset: u16,
    cursor: u16,
    last: (u16, u16),
    focus: Option<(u16, u16)>,
}

impl Stack {
    pub fn new(area: Rect, offset: u16) -> Self {
        Self {
            area,
            offset,
            cursor: 0,
            last: (0, 0),
            focus: None,
        }
    }

    pub fn width(&self) -> u16 {
        self.area.width
    }

    /// Rows allocated so far
    pub fn total_height(&self) -> u16 {
        self.cursor
    }

    pub fn gap(&mut self, rows: u16) {
        self.cursor = self.cursor.saturating_add(rows);
    }

    fn allocate(&mut self, height: u16) -> (u16, u16) {
        let top = self.cursor;
        self.cursor = self.cursor.saturating_add(height);
        self.last = (top, self.cursor);
        self.last
    }

    /// Allocate a full-width block, returning its rectangle when fully visible
    pub fn next(&mut self, height: u16) -> Option<Rect> {
        let (top, bottom) = self.allocate(height);
        if top < self.offset || bottom > self.offset + self.area.height {
            return None;
        }
        Some(Rect::new(self.area.x, self.area.y + top - self.offset, self.area.width, height))
    }

    /// Allocate a block for text, drawing whatever part of it is visible
    pub fn paragraph(&mut self, f: &mut Frame, paragraph: Paragraph, height: u16) {
        let (top, bottom) = self.allocate(height);
        let visible_top = top.max(self.offset);
        let visible_bottom = bottom.min(self.offset + self.area.height);
        if visible_bottom <= visible_top {
            return;
        }
        let rect = Rect::new(
            self.area.x,
            self.area.y + visible_top - self.offset,
            self.area.width,
            visible_bottom - visible_top,
        );
        f.render_widget(paragraph.scroll((visible_top - top, 0)), rect);
    }

    /// Wrapped text in one style
    pub fn text(&mut self, f: &mut Frame, text: &str, style: Style) {
        let height = wrapped_height(text, self.width());
        let paragraph = Paragraph::new(text.to_string()).style(style).wrap(Wrap { trim: true });
        self.paragraph(f, paragraph, height);
    }

    /// Mark the block allocated last as holding keyboard focus
    pub fn mark_focus(&mut self) {
        self.focus = Some(self.last);
    }

    /// Virtual rows of the focused block
    pub fn focus_span(&self) -> Option<(u16, u16)> {
        self.focus
    }
}

/// Keyboard focus over a page's interactive widgets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRing {
    len: usize,
    current: Option<usize>,
}

impl FocusRing {
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is(&self, index: usize) -> bool {
        self.current == Some(index)
    }

    /// Move forward, entering at the first widget
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = Some(self.current.map_or(0, |index| (index + 1) % self.len));
    }

    /// Move backward, entering at the last widget
    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = Some(self.current.map_or(self.len - 1, |index| (index + self.len - 1) % self.len));
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.current = index.filter(|index| *index < self.len);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Screen areas of clickable items, rebuilt on every render
#[derive(Debug, Clone)]
pub struct HitMap<T> {
    areas: Vec<(Rect, T)>,
}

impl<T> Default for HitMap<T> {
    fn default() -> Self {
        Self { areas: Vec::new() }
    }
}

impl<T: Copy> HitMap<T> {
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn push(&mut self, rect: Rect, item: T) {
        self.areas.push((rect, item));
    }

    #[cfg(test)]
    pub fn areas(&self) -> &[(Rect, T)] {
        &self.areas
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<T> {
        let position = Position::new(column, row);
        self.areas
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, item)| *item)
    }
}

/// Page title and lead paragraph
pub fn heading(f: &mut Frame, stack: &mut Stack, title: &str, subtitle: &str) {
    let title_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    stack.paragraph(f, Paragraph::new(Span::styled(title.to_string(), title_style)), 1);
    stack.gap(1);
    stack.text(f, subtitle, Style::default().fg(Color::Gray));
    stack.gap(1);
}

/// Section title with an optional description
pub fn section(f: &mut Frame, stack: &mut Stack, title: &str, description: Option<&str>) {
    stack.gap(1);
    let style = Style::default().fg(palette("primary")).add_modifier(Modifier::BOLD);
    stack.paragraph(f, Paragraph::new(Span::styled(title.to_string(), style)), 1);
    if let Some(description) = description {
        stack.text(f, description, Style::default().fg(Color::DarkGray));
    }
    stack.gap(1);
}

/// Split `rect` into `count` equal columns separated by `gap` cells
pub fn columns(rect: Rect, count: u16, gap: u16) -> Vec<Rect> {
    let count = count.max(1);
    let width = rect.width.saturating_sub(gap * (count - 1)) / count;
    (0..count)
        .map(|index| Rect::new(rect.x + index * (width + gap), rect.y, width, rect.height))
        .collect()
}

/// How many columns of at least `min_width` fit in `width`, capped at `max`
pub fn column_count(width: u16, min_width: u16, max: u16) -> u16 {
    (width / min_width.max(1)).clamp(1, max.max(1))
}

/// Lay cards out in as many columns of at least `min_width` as fit, each row
/// as tall as its tallest card
pub fn card_grid(f: &mut Frame, stack: &mut Stack, cards: &[Card], min_width: u16) {
    let count = column_count(stack.width(), min_width, u16::try_from(cards.len()).unwrap_or(1));
    let cell_width = columns(Rect::new(0, 0, stack.width(), 1), count, 2)[0].width;
    for row in cards.chunks(usize::from(count)) {
        let height = row.iter().map(|card| card.height(cell_width)).max().unwrap_or(0);
        if let Some(rect) = stack.next(height) {
            for (card, cell) in row.iter().zip(columns(rect, count, 2)) {
                card.render(f, cell);
            }
        }
        stack.gap(1);
    }
}

/// Pack spans into lines no wider than `width`, one space between spans
pub fn wrap_spans(spans: Vec<Span<'static>>, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;
    for span in spans {
        let span_width = span.width();
        if !current.is_empty() && used + 1 + span_width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(" "));
            used += 1;
        }
        used += span_width;
        current.push(span);
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_hides_partially_visible_blocks() {
        let mut stack = Stack::new(Rect::new(0, 5, 40, 10), 3);
        assert_eq!(stack.next(2), None);
        assert_eq!(stack.next(4), None);
        assert_eq!(stack.next(4), Some(Rect::new(0, 8, 40, 4)));
        assert_eq!(stack.next(5), None);
        assert_eq!(stack.total_height(), 15);
    }

    #[test]
    fn test_stack_records_focus_span() {
        let mut stack = Stack::new(Rect::new(0, 0, 40, 10), 0);
        stack.gap(3);
        stack.next(2);
        stack.mark_focus();
        stack.next(6);
        assert_eq!(stack.focus_span(), Some((3, 5)));
    }

    #[test]
    fn test_focus_ring_wraps_both_ways() {
        let mut ring = FocusRing::new(3);
        ring.previous();
        assert_eq!(ring.current(), Some(2));
        ring.next();
        assert_eq!(ring.current(), Some(0));
        ring.set(Some(7));
        assert_eq!(ring.current(), None);
        ring.next();
        assert!(ring.is(0));
    }

    #[test]
    fn test_empty_focus_ring_stays_unfocused() {
        let mut ring = FocusRing::new(0);
        ring.next();
        assert_eq!(ring.current(), None);
    }

    #[test]
    fn test_columns_split_evenly() {
        let rects = columns(Rect::new(2, 0, 42, 3), 2, 2);
        assert_eq!(rects, vec![Rect::new(2, 0, 20, 3), Rect::new(24, 0, 20, 3)]);
        assert_eq!(column_count(100, 30, 3), 3);
        assert_eq!(column_count(20, 30, 3), 1);
    }

    #[test]
    fn test_wrap_spans_breaks_lines() {
        let spans = vec![Span::raw("aaaa"), Span::raw("bbbb"), Span::raw("cc")];
        let lines = wrap_spans(spans, 9);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].width(), 9);
        assert_eq!(lines[1].width(), 2);
    }
}
