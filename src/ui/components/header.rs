//! Top bar: menu toggle, page search, language switch and call-to-action
//! buttons.

use crate::i18n::Language;
use crate::ui::components::button::{Button, ButtonSize, ButtonVariant};
use crate::ui::components::combobox::{ComboOption, Combobox, ComboboxConfig, Selection};
use crate::ui::core::{Action, AppContext, Component, NavSection, Page};
use crate::utils::color::palette;
use crate::utils::text::width;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the page search trigger
const SEARCH_WIDTH: u16 = 34;

/// Page search options grouped by sidebar section
pub fn page_options(ctx: &AppContext) -> Vec<ComboOption> {
    let t = ctx.t();
    NavSection::ALL
        .into_iter()
        .flat_map(|section| section.pages().map(move |page| (section, page)))
        .map(|(section, page)| {
            ComboOption::new(page.id(), page.title(t))
                .with_icon(page.icon(&ctx.icons))
                .with_group(section.title(t))
        })
        .collect()
}

#[derive(Debug, Default)]
struct HeaderHits {
    menu: Option<Rect>,
    languages: Vec<(Rect, Language)>,
    github: Option<Rect>,
    get_started: Option<Rect>,
}

pub struct HeaderComponent {
    search: Combobox,
    ctx: AppContext,
    hits: HeaderHits,
}

impl HeaderComponent {
    pub fn new(ctx: &AppContext) -> Self {
        let t = &ctx.t().header;
        let config = ComboboxConfig {
            placeholder: t.search_placeholder.to_string(),
            search_placeholder: t.search_input.to_string(),
            empty_text: t.search_empty.to_string(),
            loading_text: ctx.t().combobox.loading.to_string(),
            width: SEARCH_WIDTH,
            ..ComboboxConfig::default()
        };
        // The search never shows a value of its own: picking a page asks the
        // app to navigate there
        let selection = Selection::external(None, |value| {
            value
                .as_deref()
                .and_then(Page::from_id)
                .map_or(Action::None, Action::Navigate)
        });
        Self {
            search: Combobox::new(page_options(ctx), config, selection, ctx),
            ctx: ctx.clone(),
            hits: HeaderHits::default(),
        }
    }

    pub fn set_context(&mut self, ctx: &AppContext) {
        let language_changed = ctx.language != self.ctx.language || ctx.icons.theme() != self.ctx.icons.theme();
        self.ctx = ctx.clone();
        self.search.set_context(ctx);
        if language_changed {
            let t = &ctx.t().header;
            self.search.set_options(page_options(ctx));
            self.search
                .set_texts(t.search_placeholder, t.search_input, t.search_empty, ctx.t().combobox.loading);
        }
    }

    /// Focus the page search and open its list
    pub fn focus_search(&mut self) {
        self.search.on_focus();
        if !self.search.is_open() {
            self.search.toggle_open();
        }
    }

    pub fn blur(&mut self) {
        self.search.on_blur();
    }

    pub fn has_focus(&self) -> bool {
        self.search.is_focused()
    }

    /// The open search list takes every key
    pub fn captures_input(&self) -> bool {
        self.search.is_open()
    }

    pub fn search(&self) -> &Combobox {
        &self.search
    }

    /// Draw the search popup above everything else
    pub fn render_overlay(&mut self, f: &mut Frame, viewport: Rect) {
        self.search.render_popup(f, viewport);
    }

    fn language_switch(&mut self, f: &mut Frame, x: u16, y: u16) {
        let mut cursor = x;
        self.hits.languages.clear();
        for (index, language) in Language::ALL.into_iter().enumerate() {
            if index > 0 {
                f.render_widget(
                    Paragraph::new(Span::styled("|", Style::default().fg(Color::DarkGray))),
                    Rect::new(cursor, y, 1, 1),
                );
                cursor += 1;
            }
            let code = format!(" {} ", language.code());
            let style = if language == self.ctx.language {
                Style::default()
                    .bg(palette("primary"))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let rect = Rect::new(cursor, y, width(&code), 1);
            f.render_widget(Paragraph::new(Span::styled(code, style)), rect);
            self.hits.languages.push((rect, language));
            cursor += rect.width;
        }
    }

    fn switch_width() -> u16 {
        Language::ALL
            .iter()
            .map(|language| width(language.code()) + 2)
            .sum::<u16>()
            + Language::ALL.len() as u16
            - 1
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.search.handle_key_events(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.search.contains(mouse.column, mouse.row) {
            if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) && !self.search.is_focused() {
                self.search.on_focus();
            }
            return self.search.handle_mouse_events(mouse);
        }
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Action::None;
        }

        let position = Position::new(mouse.column, mouse.row);
        let hit = |rect: Option<Rect>| rect.is_some_and(|rect| rect.contains(position));
        if hit(self.hits.menu) {
            return Action::ToggleSidebar;
        }
        if let Some((_, language)) = self.hits.languages.iter().find(|(rect, _)| rect.contains(position)) {
            return Action::SetLanguage(*language);
        }
        if hit(self.hits.github) {
            return Action::ButtonPressed(self.ctx.t().header.github.to_string());
        }
        if hit(self.hits.get_started) {
            return Action::Navigate(Page::Install);
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let middle = rect.y + rect.height.saturating_sub(1) / 2;
        let t = &self.ctx.t().header;

        let menu = self.ctx.icons.icons().control.menu;
        let menu_rect = Rect::new(rect.x + 1, middle, width(menu).min(rect.width), 1);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(menu, Style::default().fg(Color::White)))),
            menu_rect,
        );
        self.hits.menu = Some(menu_rect);

        // Right cluster is laid out from the right edge inward
        let get_started = Button::new(t.get_started).size(ButtonSize::Sm);
        let github = Button::new(t.github)
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::Sm)
            .icon(self.ctx.icons.icons().status.github);
        let right = rect.x + rect.width;
        let get_started_x = right.saturating_sub(get_started.width() + 1);
        let github_x = get_started_x.saturating_sub(github.width() + 1);
        let switch_x = github_x.saturating_sub(Self::switch_width() + 2);

        let search_x = rect.x + 4;
        let search_width = SEARCH_WIDTH.min(switch_x.saturating_sub(search_x + 1));
        if search_width >= 12 {
            self.search.render(f, Rect::new(search_x, rect.y, search_width, rect.height));
        } else {
            self.search.hide();
        }

        if switch_x > search_x {
            self.language_switch(f, switch_x, middle);
            self.hits.github = Some(github.render(f, Rect::new(github_x, middle, github.width(), 1), ""));
            self.hits.get_started =
                Some(get_started.render(f, Rect::new(get_started_x, middle, get_started.width(), 1), ""));
        } else {
            self.hits.languages.clear();
            self.hits.github = None;
            self.hits.get_started = None;
        }
    }

    fn poll_pointer(&mut self) {
        self.search.poll_pointer();
    }

    fn on_blur(&mut self) {
        self.blur();
    }
}
