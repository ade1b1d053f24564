use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::options::OptionRow;
use super::state::{Combobox, TriggerContent};
use crate::constants::COMBOBOX_MAX_VISIBLE_ROWS;
use crate::ui::core::{Action, Component};
use crate::utils::color::palette;
use crate::utils::text::{truncate, width};

/// Rows taken by the trigger box
const TRIGGER_HEIGHT: u16 = 3;
/// Popup chrome: two borders, the search line and its separator
const POPUP_CHROME: u16 = 4;

impl Combobox {
    /// Rows needed to draw the label, trigger and helper line
    pub fn height(&self) -> u16 {
        let label = u16::from(self.config.label.is_some());
        let footer = u16::from(self.footer_text().is_some());
        label + TRIGGER_HEIGHT + footer
    }

    fn trigger_style(&self) -> Style {
        if self.config.disabled {
            Style::default().fg(Color::DarkGray)
        } else if self.config.error.is_some() {
            Style::default().fg(palette("danger"))
        } else if self.focused || self.open {
            Style::default().fg(palette("primary"))
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn trigger_line(&self, inner_width: u16) -> Line<'static> {
        let icons = &self.ctx.icons;
        let chevrons = icons.chevrons_up_down();
        let clear = if self.shows_clear() { Some(icons.clear()) } else { None };
        let reserved = width(chevrons) + clear.map_or(0, |glyph| width(glyph) + 1) + 1;
        let text_room = usize::from(inner_width.saturating_sub(reserved));

        let mut spans = match self.trigger_content() {
            TriggerContent::Loading => vec![
                Span::styled(format!("{} ", self.ctx.spinner()), Style::default().fg(palette("primary"))),
                Span::styled(
                    truncate(&self.config.loading_text, text_room.saturating_sub(2)),
                    Style::default().fg(Color::DarkGray),
                ),
            ],
            TriggerContent::Selected(option) => {
                let mut spans = Vec::new();
                let mut room = text_room;
                if let Some(icon) = option.icon {
                    spans.push(Span::raw(format!("{icon} ")));
                    room = room.saturating_sub(usize::from(width(icon)) + 1);
                }
                let text_style = if self.config.disabled {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                spans.push(Span::styled(truncate(&option.label, room), text_style));
                spans
            }
            TriggerContent::Placeholder => vec![Span::styled(
                truncate(&self.config.placeholder, text_room),
                Style::default().fg(Color::DarkGray),
            )],
        };

        let used: u16 = spans.iter().map(|span| width(&span.content)).sum();
        let tail = width(chevrons) + clear.map_or(0, |glyph| width(glyph) + 1);
        let gap = inner_width.saturating_sub(used + tail);
        spans.push(Span::raw(" ".repeat(usize::from(gap))));
        if let Some(glyph) = clear {
            spans.push(Span::styled(glyph, Style::default().fg(Color::Gray)));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(chevrons, Style::default().fg(Color::DarkGray)));
        Line::from(spans)
    }

    /// Draw the open list. Call after everything else on screen so the popup
    /// stays on top; `viewport` bounds where it may be placed.
    pub fn render_popup(&mut self, f: &mut Frame, viewport: Rect) {
        let Some(trigger) = self.hits.trigger else {
            return;
        };
        if !self.open {
            return;
        }

        let rows = self.rows();
        let highlighted_value = self.highlighted_option().map(|option| option.value.clone());
        let visible = rows.len().clamp(1, COMBOBOX_MAX_VISIBLE_ROWS);
        let height = POPUP_CHROME + visible as u16;

        let below = trigger.y + trigger.height;
        let y = if below + height <= viewport.y + viewport.height {
            below
        } else if trigger.y >= viewport.y + height {
            trigger.y - height
        } else {
            (viewport.y + viewport.height).saturating_sub(height).max(viewport.y)
        };
        let popup = Rect::new(trigger.x, y, trigger.width, height).intersection(viewport);
        if popup.height < POPUP_CHROME {
            return;
        }

        f.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        // Search input with the same block cursor as dialog inputs
        let search_line = if self.search.is_empty() {
            Line::from(vec![
                Span::styled(format!("{} ", self.ctx.icons.search()), Style::default().fg(Color::DarkGray)),
                Span::styled("█", Style::default().fg(Color::White)),
                Span::styled(self.config.search_placeholder.clone(), Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![
                Span::styled(format!("{} ", self.ctx.icons.search()), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{}█", self.search), Style::default().fg(Color::White)),
            ])
        };
        f.render_widget(Paragraph::new(search_line), Rect::new(inner.x, inner.y, inner.width, 1));
        f.render_widget(
            Paragraph::new("─".repeat(usize::from(inner.width))).style(Style::default().fg(Color::DarkGray)),
            Rect::new(inner.x, inner.y + 1, inner.width, 1),
        );

        let list = Rect::new(inner.x, inner.y + 2, inner.width, inner.height.saturating_sub(2));
        let mut row_hits = Vec::new();

        if rows.is_empty() {
            f.render_widget(
                Paragraph::new(self.config.empty_text.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray)),
                Rect::new(list.x, list.y, list.width, 1),
            );
        } else {
            let window = usize::from(list.height);
            let highlighted_row = rows
                .iter()
                .position(|row| row.option().map(|o| &o.value) == highlighted_value.as_ref())
                .unwrap_or(0);
            let mut scroll = self.scroll.min(rows.len().saturating_sub(window));
            if highlighted_row < scroll {
                // Keep the group header of the first item in view when possible
                scroll = highlighted_row.saturating_sub(1);
            } else if highlighted_row >= scroll + window {
                scroll = highlighted_row + 1 - window;
            }

            let selected = self.value().map(str::to_string);
            for (offset, row) in rows.iter().skip(scroll).take(window).enumerate() {
                let area = Rect::new(list.x, list.y + offset as u16, list.width, 1);
                match row {
                    OptionRow::Header(name) => {
                        f.render_widget(
                            Paragraph::new(Line::from(Span::styled(
                                truncate(name, usize::from(area.width)),
                                Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
                            ))),
                            area,
                        );
                    }
                    OptionRow::Item(option) => {
                        let is_selected = selected.as_deref() == Some(option.value.as_str());
                        let is_highlighted = highlighted_value.as_deref() == Some(option.value.as_str());
                        f.render_widget(Paragraph::new(self.option_line(option, is_selected, area.width)).style(
                            if is_highlighted {
                                Style::default().bg(Color::DarkGray).fg(Color::White)
                            } else {
                                Style::default()
                            },
                        ), area);
                        row_hits.push((area, option.value.clone()));
                    }
                }
            }
            self.scroll = scroll;
        }

        self.hits.popup = Some(popup);
        self.hits.rows = row_hits;
        self.update_bounds();
    }

    fn option_line(&self, option: &super::options::ComboOption, selected: bool, row_width: u16) -> Line<'static> {
        let check = self.ctx.icons.check();
        let mut spans = vec![Span::raw(" ")];
        let mut room = usize::from(row_width).saturating_sub(usize::from(width(check)) + 2);
        if let Some(icon) = option.icon {
            spans.push(Span::raw(format!("{icon} ")));
            room = room.saturating_sub(usize::from(width(icon)) + 1);
        }
        let label = truncate(&option.label, room);
        let pad = room.saturating_sub(usize::from(width(&label)));
        spans.push(Span::raw(label));
        spans.push(Span::raw(" ".repeat(pad)));
        if selected {
            spans.push(Span::styled(check, Style::default().fg(palette("primary"))));
        }
        Line::from(spans)
    }

    fn update_bounds(&self) {
        if let Some(guard) = &self.outside_click {
            let bounds: Vec<Rect> = [self.hits.widget, self.hits.popup].into_iter().flatten().collect();
            guard.set_bounds(&bounds);
        }
    }

    fn handle_closed_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                self.toggle_open();
                Action::None
            }
            KeyCode::Delete | KeyCode::Backspace if self.shows_clear() => self.clear_selection(),
            _ => Action::None,
        }
    }

    fn handle_open_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.toggle_open();
                Action::None
            }
            KeyCode::Up => {
                self.move_highlight(-1);
                Action::None
            }
            KeyCode::Down => {
                self.move_highlight(1);
                Action::None
            }
            KeyCode::Enter => match self.highlighted_option().map(|option| option.value.clone()) {
                Some(value) => self.select_option(&value),
                None => Action::None,
            },
            KeyCode::Backspace => {
                let mut search = self.search.clone();
                search.pop();
                self.update_search(search);
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                let search = format!("{}{}", self.search, c);
                self.update_search(search);
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for Combobox {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.open {
            self.handle_open_key(key)
        } else {
            self.handle_closed_key(key)
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let position = Position::new(mouse.column, mouse.row);
        let inside = |rect: Option<Rect>| rect.is_some_and(|rect| rect.contains(position));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // The clear glyph sits inside the trigger; handle it first so the
                // press never reaches the toggle
                if inside(self.hits.clear) {
                    return self.clear_selection();
                }
                if let Some(value) = self
                    .hits
                    .rows
                    .iter()
                    .find(|(rect, _)| rect.contains(position))
                    .map(|(_, value)| value.clone())
                {
                    return self.select_option(&value);
                }
                if inside(self.hits.trigger) {
                    self.toggle_open();
                }
                Action::None
            }
            MouseEventKind::ScrollDown if self.open && inside(self.hits.popup) => {
                self.move_highlight(1);
                Action::None
            }
            MouseEventKind::ScrollUp if self.open && inside(self.hits.popup) => {
                self.move_highlight(-1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let widget_width = self.config.width.min(rect.width);
        let area = Rect::new(rect.x, rect.y, widget_width, self.height().min(rect.height));
        let mut y = area.y;

        if let Some(label) = &self.config.label {
            let style = if self.config.disabled {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            f.render_widget(
                Paragraph::new(truncate(label, usize::from(area.width))).style(style),
                Rect::new(area.x, y, area.width, 1),
            );
            y += 1;
        }

        let trigger = Rect::new(area.x, y, area.width, TRIGGER_HEIGHT.min(area.bottom().saturating_sub(y)));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.trigger_style());
        let inner = block.inner(trigger);
        f.render_widget(block, trigger);
        f.render_widget(Paragraph::new(self.trigger_line(inner.width)), inner);
        y += trigger.height;

        self.hits.clear = if self.shows_clear() {
            // Clear glyph and one space sit left of the chevrons; wide glyphs take two cells
            let chevrons = width(self.ctx.icons.chevrons_up_down());
            let glyph = width(self.ctx.icons.clear());
            let x = (inner.x + inner.width).saturating_sub(chevrons + 1 + glyph);
            Some(Rect::new(x, inner.y, glyph, 1))
        } else {
            None
        };

        if let Some((text, is_error)) = self.footer_text() {
            if y < area.bottom() {
                let style = if is_error {
                    Style::default().fg(palette("danger"))
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                f.render_widget(
                    Paragraph::new(truncate(text, usize::from(area.width))).style(style),
                    Rect::new(area.x, y, area.width, 1),
                );
            }
        }

        self.hits.widget = Some(area);
        self.hits.trigger = Some(trigger);
        self.update_bounds();
    }

    fn poll_pointer(&mut self) {
        self.poll_outside_click();
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.dismiss();
    }
}
