use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::utils::color::palette;
use crate::utils::text::width;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Joined buttons where at most one segment is active
#[derive(Debug, Clone, Default)]
pub struct ButtonGroup {
    items: Vec<String>,
    active: Option<usize>,
    orientation: Orientation,
    focused: bool,
    /// Segment areas from the last render
    segments: Vec<Rect>,
}

impl ButtonGroup {
    pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn set_items(&mut self, items: impl IntoIterator<Item = impl Into<String>>) {
        self.items = items.into_iter().map(Into::into).collect();
        if self.active.is_some_and(|index| index >= self.items.len()) {
            self.active = None;
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_label(&self) -> Option<&str> {
        self.active.and_then(|index| self.items.get(index)).map(String::as_str)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.active = Some(index);
        }
    }

    /// Move the active segment, wrapping at both ends
    pub fn step(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let current = self.active.map_or(-1, |index| index as isize);
        let len = self.items.len() as isize;
        let next = if current < 0 && delta < 0 { len - 1 } else { (current + delta).rem_euclid(len) };
        self.active = Some(next as usize);
    }

    /// Segment under a screen position
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let position = ratatui::layout::Position::new(column, row);
        self.segments.iter().position(|rect| rect.contains(position))
    }

    /// Forget segment areas while scrolled out of view
    pub fn hide(&mut self) {
        self.segments.clear();
    }

    pub fn height(&self) -> u16 {
        match self.orientation {
            Orientation::Horizontal => 1,
            Orientation::Vertical => self.items.len() as u16,
        }
    }

    fn segment_style(&self, index: usize) -> Style {
        let mut style = if self.active == Some(index) {
            Style::default().bg(palette("secondary")).fg(palette("foreground"))
        } else {
            Style::default().fg(ratatui::style::Color::White)
        };
        if self.focused && self.active.map_or(index == 0, |active| active == index) {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        style
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let border = Style::default().fg(palette("border"));
        self.segments.clear();
        match self.orientation {
            Orientation::Horizontal => {
                let mut spans = vec![Span::styled("[", border)];
                let mut x = area.x + 1;
                for (index, item) in self.items.iter().enumerate() {
                    if index > 0 {
                        spans.push(Span::styled("│", border));
                        x += 1;
                    }
                    let text = format!(" {item} ");
                    let w = width(&text);
                    self.segments.push(Rect::new(x, area.y, w, 1).intersection(area));
                    spans.push(Span::styled(text, self.segment_style(index)));
                    x += w;
                }
                spans.push(Span::styled("]", border));
                f.render_widget(Paragraph::new(Line::from(spans)), Rect::new(area.x, area.y, area.width, 1));
            }
            Orientation::Vertical => {
                let inner = self.items.iter().map(|item| width(item)).max().unwrap_or(0) + 2;
                for (index, item) in self.items.iter().enumerate() {
                    let y = area.y + index as u16;
                    if y >= area.bottom() {
                        break;
                    }
                    let text = format!(" {:<pad$} ", item, pad = usize::from(inner - 2));
                    let line = Line::from(vec![
                        Span::styled("│", border),
                        Span::styled(text, self.segment_style(index)),
                        Span::styled("│", border),
                    ]);
                    let rect = Rect::new(area.x, y, inner + 2, 1).intersection(area);
                    self.segments.push(rect);
                    f.render_widget(Paragraph::new(line), rect);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_wraps() {
        let mut group = ButtonGroup::new(["Day", "Week", "Month"]);
        group.step(1);
        assert_eq!(group.active_label(), Some("Day"));
        group.step(-1);
        assert_eq!(group.active_label(), Some("Month"));
        group.step(1);
        assert_eq!(group.active_label(), Some("Day"));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut group = ButtonGroup::new(["A", "B"]);
        group.select(5);
        assert_eq!(group.active(), None);
    }

    #[test]
    fn test_shrinking_items_drops_active() {
        let mut group = ButtonGroup::new(["A", "B", "C"]);
        group.select(2);
        group.set_items(["A"]);
        assert_eq!(group.active(), None);
    }
}
