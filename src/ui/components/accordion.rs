use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::icons::IconService;
use crate::utils::color::palette;
use crate::utils::text::wrapped_height;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccordionMode {
    /// At most one item open
    #[default]
    Single,
    /// Items open and close independently
    Multiple,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    pub value: String,
    pub title: String,
    pub body: String,
}

impl AccordionItem {
    pub fn new(value: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Accordion {
    mode: AccordionMode,
    items: Vec<AccordionItem>,
    open: Vec<String>,
    /// Item whose trigger has keyboard focus
    cursor: Option<usize>,
    triggers: Vec<Rect>,
}

impl Accordion {
    pub fn new(mode: AccordionMode, items: Vec<AccordionItem>) -> Self {
        Self {
            mode,
            items,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> AccordionMode {
        self.mode
    }

    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    /// Replace the items, keeping open state for values that still exist
    pub fn set_items(&mut self, items: Vec<AccordionItem>) {
        self.open.retain(|value| items.iter().any(|item| &item.value == value));
        self.items = items;
    }

    pub fn is_open(&self, value: &str) -> bool {
        self.open.iter().any(|open| open == value)
    }

    pub fn toggle(&mut self, value: &str) {
        let was_open = self.is_open(value);
        match self.mode {
            AccordionMode::Single => {
                self.open.clear();
                if !was_open {
                    self.open.push(value.to_string());
                }
            }
            AccordionMode::Multiple => {
                if was_open {
                    self.open.retain(|open| open != value);
                } else {
                    self.open.push(value.to_string());
                }
            }
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Option<usize>) {
        self.cursor = cursor.filter(|index| *index < self.items.len());
    }

    pub fn toggle_at(&mut self, index: usize) {
        if let Some(value) = self.items.get(index).map(|item| item.value.clone()) {
            self.toggle(&value);
        }
    }

    /// Trigger under a screen position
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.triggers.iter().position(|rect| rect.contains(position))
    }

    /// Forget trigger areas while scrolled out of view
    pub fn hide(&mut self) {
        self.triggers.clear();
    }

    fn body_height(body: &str, width: u16) -> u16 {
        wrapped_height(body, width.saturating_sub(2))
    }

    /// Rows needed at `width` with the current open state
    pub fn height(&self, width: u16) -> u16 {
        self.items
            .iter()
            .map(|item| {
                let body = if self.is_open(&item.value) {
                    Self::body_height(&item.body, width) + 1
                } else {
                    0
                };
                // trigger + divider
                2 + body
            })
            .sum()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, icons: &IconService) {
        self.triggers.clear();
        let mut y = area.y;
        let divider = "─".repeat(usize::from(area.width));

        for (index, item) in self.items.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            let open = self.is_open(&item.value);
            let chevron = if open { icons.chevron_down() } else { icons.chevron_right() };
            let mut title_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
            if self.cursor == Some(index) {
                title_style = title_style.add_modifier(Modifier::UNDERLINED).fg(palette("primary"));
            }
            let trigger = Rect::new(area.x, y, area.width, 1);
            f.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(format!("{chevron} "), Style::default().fg(Color::DarkGray)),
                    Span::styled(item.title.clone(), title_style),
                ])),
                trigger,
            );
            self.triggers.push(trigger);
            y += 1;

            if open {
                let height = Self::body_height(&item.body, area.width).min(area.bottom().saturating_sub(y));
                f.render_widget(
                    Paragraph::new(item.body.as_str())
                        .wrap(Wrap { trim: true })
                        .style(Style::default().fg(palette("slate-400"))),
                    Rect::new(area.x + 2, y, area.width.saturating_sub(2), height),
                );
                y += height + 1;
            }

            if y < area.bottom() {
                f.render_widget(
                    Paragraph::new(divider.as_str()).style(Style::default().fg(Color::DarkGray)),
                    Rect::new(area.x, y, area.width, 1),
                );
                y += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<AccordionItem> {
        vec![
            AccordionItem::new("one", "One", "First"),
            AccordionItem::new("two", "Two", "Second"),
        ]
    }

    #[test]
    fn test_single_keeps_one_open() {
        let mut accordion = Accordion::new(AccordionMode::Single, items());
        accordion.toggle("one");
        accordion.toggle("two");
        assert!(!accordion.is_open("one"));
        assert!(accordion.is_open("two"));

        accordion.toggle("two");
        assert!(!accordion.is_open("two"));
    }

    #[test]
    fn test_multiple_toggles_independently() {
        let mut accordion = Accordion::new(AccordionMode::Multiple, items());
        accordion.toggle("one");
        accordion.toggle("two");
        assert!(accordion.is_open("one") && accordion.is_open("two"));

        accordion.toggle("one");
        assert!(!accordion.is_open("one"));
        assert!(accordion.is_open("two"));
    }

    #[test]
    fn test_height_grows_when_open() {
        let mut accordion = Accordion::new(AccordionMode::Single, items());
        let closed = accordion.height(40);
        accordion.toggle_at(0);
        assert_eq!(accordion.height(40), closed + 2);
    }
}
