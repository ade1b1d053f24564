//! Sidebar navigation for the documentation shell.
//!
//! Shows the brand and the pages grouped by section. On the introduction
//! page the sidebar collapses to icons and expands while hovered.

use crate::constants::{BRAND_MARK, BRAND_NAME, BRAND_VERSION};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, AppContext, Component, NavSection, Page};
use crate::utils::color::palette;
use crate::utils::text::truncate;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Rows taken by the brand above the list
const BRAND_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SidebarEntry {
    Section(NavSection),
    Page(Page),
}

/// Navigation sidebar listing every documentation page.
///
/// - Mouse click on a page navigates to it
/// - Mouse wheel walks pages like `J`/`K`
/// - Hover state is tracked so the app can expand a collapsed sidebar
pub struct SidebarComponent {
    pub current: Page,
    /// Icon-only rendering
    pub collapsed: bool,
    ctx: AppContext,
    items: Vec<SidebarEntry>,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
    area: Rect,
    list_area: Rect,
    hovered: bool,
}

impl SidebarComponent {
    pub fn new(ctx: &AppContext, current: Page) -> Self {
        let mut sidebar = Self {
            current,
            collapsed: false,
            ctx: ctx.clone(),
            items: Vec::new(),
            list_state: ListState::default(),
            scrollbar_helper: ScrollbarHelper::new(),
            area: Rect::default(),
            list_area: Rect::default(),
            hovered: false,
        };
        sidebar.build_item_list();
        sidebar
    }

    pub fn set_context(&mut self, ctx: &AppContext) {
        self.ctx = ctx.clone();
    }

    /// Whether the pointer was over the sidebar on the last mouse event
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Track pointer movement; returns true when the hover state changed
    pub fn track_hover(&mut self, column: u16, row: u16) -> bool {
        let hovered = self.contains(column, row);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// Forget the hover state, e.g. when the sidebar is hidden
    pub fn reset_hover(&mut self) {
        self.hovered = false;
        self.area = Rect::default();
    }

    fn build_item_list(&mut self) {
        self.items = NavSection::ALL
            .into_iter()
            .flat_map(|section| {
                std::iter::once(SidebarEntry::Section(section)).chain(section.pages().map(SidebarEntry::Page))
            })
            .collect();
    }

    fn selection_index(&self) -> Option<usize> {
        self.items.iter().position(|item| *item == SidebarEntry::Page(self.current))
    }

    fn render_item(&self, item: SidebarEntry, width: u16) -> ListItem<'static> {
        let t = self.ctx.t();
        match item {
            SidebarEntry::Section(_) if self.collapsed => {
                let rule = "─".repeat(usize::from(width.saturating_sub(2)).min(3));
                ListItem::new(Line::from(Span::styled(format!(" {rule}"), Style::default().fg(Color::DarkGray))))
            }
            SidebarEntry::Section(section) => ListItem::new(Line::from(Span::styled(
                format!(" {}", section.title(t).to_uppercase()),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
            ))),
            SidebarEntry::Page(page) => {
                let icon = page.icon(&self.ctx.icons);
                let text = if self.collapsed {
                    format!(" {icon}")
                } else {
                    let room = usize::from(width.saturating_sub(6));
                    format!("  {icon} {}", truncate(page.title(t), room))
                };
                let style = if page == self.current {
                    Style::default().fg(palette("primary")).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(Span::styled(text, style)))
            }
        }
    }

    fn render_brand(&self, f: &mut Frame, area: Rect) {
        let mark = Span::styled(
            format!(" {BRAND_MARK} "),
            Style::default()
                .bg(palette("primary"))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        let line = if self.collapsed {
            Line::from(mark)
        } else {
            Line::from(vec![
                mark,
                Span::raw(" "),
                Span::styled(BRAND_NAME, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::styled(BRAND_VERSION, Style::default().fg(Color::DarkGray)),
            ])
        };
        f.render_widget(Paragraph::new(line), Rect::new(area.x, area.y + 1, area.width, 1));
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        // J/K are global so they work whatever has focus
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.contains(mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.list_area.contains(Position::new(mouse.column, mouse.row)) {
                    return Action::None;
                }
                let local_index = (mouse.row - self.list_area.y) as usize;
                let clicked_index = self.list_state.offset() + local_index;

                // Guard against clicks beyond the available data and on headers
                match self.items.get(clicked_index) {
                    Some(SidebarEntry::Page(page)) => Action::Navigate(*page),
                    _ => Action::None,
                }
            }
            MouseEventKind::ScrollUp => Action::PreviousPage,
            MouseEventKind::ScrollDown => Action::NextPage,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::Navigate(page) = action {
            self.current = page;
            self.list_state.select(self.selection_index());
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        self.render_brand(f, inner);

        let list_rect = Rect::new(
            inner.x,
            inner.y + BRAND_HEIGHT,
            inner.width,
            inner.height.saturating_sub(BRAND_HEIGHT),
        );
        let all_items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| self.render_item(*item, list_rect.width))
            .collect();

        let total_items = all_items.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_borderless_areas(list_rect, total_items);
        self.list_area = list_area;

        let selected = self.selection_index();
        self.list_state.select(selected);
        self.scrollbar_helper
            .update_state(total_items, selected.unwrap_or(0), Some(list_area.height as usize));

        let list = List::new(all_items).highlight_style(Style::default().bg(palette("slate-900")));
        f.render_stateful_widget(list, list_area, &mut self.list_state);

        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
