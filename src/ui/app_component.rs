use crate::config::Config;
use crate::constants::SIDEBAR_COLLAPSED_WIDTH;
use crate::ui::components::{DialogComponent, Footer, HeaderComponent, SidebarComponent, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType, Page},
    event_handler::EventType,
    AppContext, Component,
};
use crate::ui::layout::{LayoutManager, ShellAreas};
use crate::ui::pages::ContentComponent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

/// Follow-up actions chained from a single event before giving up
const MAX_ACTION_CHAIN: usize = 4;

/// Shell settings separate from UI components
#[derive(Debug, Clone)]
pub struct AppState {
    pub sidebar_visible: bool,
    pub sidebar_width: u16,
    pub show_footer: bool,
    pub mouse_enabled: bool,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sidebar_visible: true,
            sidebar_width: config.ui.sidebar_width,
            show_footer: config.display.show_footer,
            mouse_enabled: config.ui.mouse_enabled,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    header: HeaderComponent,
    content: ContentComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    ctx: AppContext,
    areas: ShellAreas,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(ctx: AppContext, state: AppState, start_page: Page) -> Self {
        ctx.logger
            .log(format!("AppComponent: Starting on page '{}'", start_page.id()));
        Self {
            sidebar: SidebarComponent::new(&ctx, start_page),
            header: HeaderComponent::new(&ctx),
            content: ContentComponent::new(&ctx, start_page),
            dialog: DialogComponent::new(&ctx),
            state,
            ctx,
            areas: ShellAreas::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current_page(&self) -> Page {
        self.content.current()
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn is_search_focused(&self) -> bool {
        self.header.has_focus()
    }

    /// Introduction keeps the sidebar folded to icons unless the pointer is over it
    pub fn sidebar_collapsed(&self) -> bool {
        self.current_page() == Page::Intro && !self.sidebar.is_hovered()
    }

    fn sidebar_width(&self) -> u16 {
        if !self.state.sidebar_visible {
            0
        } else if self.sidebar_collapsed() {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            self.state.sidebar_width
        }
    }

    /// Hand the current context to every component
    fn propagate_context(&mut self) {
        self.sidebar.set_context(&self.ctx);
        self.header.set_context(&self.ctx);
        self.content.set_context(&self.ctx);
        self.dialog.set_context(&self.ctx);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.ctx.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('q') => {
                self.ctx.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.ctx.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.ctx.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Char('l') => Action::ToggleLanguage,
            KeyCode::Char('b') => Action::ToggleSidebar,
            KeyCode::Char('/') => Action::FocusSearch,
            KeyCode::Char('J') => Action::NextPage,
            KeyCode::Char('K') => Action::PreviousPage,
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => Action::NextPage,
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => Action::PreviousPage,
            KeyCode::PageDown => Action::ScrollContent(self.content.page_step()),
            KeyCode::PageUp => Action::ScrollContent(-self.content.page_step()),
            KeyCode::Esc => {
                if self.content.has_focus() {
                    self.ctx.logger.log("Global key: Esc - clearing page focus".to_string());
                    self.content.blur();
                    Action::None
                } else {
                    self.ctx.logger.log("Global key: Esc - quitting application".to_string());
                    Action::Quit
                }
            }
            _ => self.content.handle_key_events(key),
        }
    }

    /// Keys for a focused but closed page search
    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.header.blur();
                Some(Action::None)
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Up | KeyCode::Down => {
                Some(self.header.handle_key_events(key))
            }
            _ => {
                self.header.blur();
                None
            }
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            // Dialog has priority when visible
            return self.dialog.handle_key_events(key);
        }
        if self.header.captures_input() {
            return self.header.handle_key_events(key);
        }
        if self.content.captures_input() {
            return self.content.handle_key_events(key);
        }
        if self.header.has_focus() {
            if let Some(action) = self.handle_search_key(key) {
                return action;
            }
        }
        self.handle_global_key(key)
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.state.mouse_enabled {
            return Action::None;
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_mouse_events(mouse);
        }

        if self.state.sidebar_visible && self.sidebar.track_hover(mouse.column, mouse.row) {
            self.ctx.logger.log(format!(
                "Sidebar: hover {}",
                if self.sidebar.is_hovered() { "entered" } else { "left" }
            ));
        }

        if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            // Popups close on outside clicks before the click lands anywhere
            self.ctx.pointer.dispatch(mouse.column, mouse.row);
            self.header.poll_pointer();
            self.content.poll_pointer();
        }

        // Open popups float above the other regions
        if self.header.captures_input() {
            return self.header.handle_mouse_events(mouse);
        }
        if self.content.captures_input() {
            return self.content.handle_mouse_events(mouse);
        }

        let inside = |rect: Rect| rect.contains((mouse.column, mouse.row).into());
        if self.areas.sidebar.is_some_and(inside) {
            self.sidebar.handle_mouse_events(mouse)
        } else if inside(self.areas.header) {
            self.header.handle_mouse_events(mouse)
        } else if self.content.contains(mouse.column, mouse.row) || inside(self.areas.content) {
            if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) && self.header.has_focus() {
                self.header.blur();
            }
            self.content.handle_mouse_events(mouse)
        } else {
            Action::None
        }
    }

    /// Apply actions the components passed through. Returns a follow-up
    /// action that goes back through the component tree.
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Navigate(page) => {
                self.ctx.logger.log(format!("Navigation: Showing page '{}'", page.id()));
                if self.header.has_focus() {
                    self.header.blur();
                }
                Action::None
            }
            Action::NextPage => Action::Navigate(self.current_page().next()),
            Action::PreviousPage => Action::Navigate(self.current_page().previous()),
            Action::FocusSearch => {
                self.ctx.logger.log("Header: Focusing page search".to_string());
                self.content.blur();
                self.header.focus_search();
                Action::None
            }
            Action::SetLanguage(language) => {
                if language != self.ctx.language {
                    self.ctx.logger.log(format!("Language: Switching to '{}'", language));
                    self.ctx.language = language;
                    self.propagate_context();
                }
                Action::None
            }
            Action::ToggleLanguage => Action::SetLanguage(self.ctx.language.toggle()),
            Action::ToggleSidebar => {
                self.state.sidebar_visible = !self.state.sidebar_visible;
                if !self.state.sidebar_visible {
                    self.sidebar.reset_hover();
                }
                self.ctx.logger.log(format!(
                    "Sidebar: {}",
                    if self.state.sidebar_visible { "shown" } else { "hidden" }
                ));
                Action::None
            }
            Action::CycleIconTheme => {
                self.ctx.icons.cycle_icon_theme();
                self.ctx
                    .logger
                    .log(format!("Icons: Switched to {:?} theme", self.ctx.icons.theme()));
                self.propagate_context();
                Action::None
            }
            Action::ShowDialog(dialog_type) => {
                // Pages ask for dialogs after the dialog saw the action
                self.ctx.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                self.dialog.update(Action::ShowDialog(dialog_type))
            }
            Action::ButtonPressed(label) => {
                self.ctx.logger.log(format!("Button: '{}' pressed", label));
                Action::None
            }
            Action::ComboboxChanged { id, value } => {
                self.ctx
                    .logger
                    .log(format!("Combobox: '{}' changed to {:?}", id, value));
                Action::None
            }
            Action::ConfirmResolved(confirmed) => {
                self.ctx.logger.log(format!("Dialog: Confirmation resolved ({})", confirmed));
                Action::None
            }
            Action::ScrollContent(_) | Action::HideDialog | Action::None => Action::None,
        }
    }

    /// Run an action through the component tree and the app, following up
    /// on whatever comes back
    pub fn dispatch(&mut self, action: Action) {
        let mut action = action;
        for _ in 0..MAX_ACTION_CHAIN {
            if action == Action::None {
                return;
            }
            let action_after_components = self.update(action);
            action = self.handle_app_action(action_after_components);
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Tick => {
                // Spinners advance one frame per tick
                self.ctx.tick = self.ctx.tick.wrapping_add(1);
                self.propagate_context();
                Action::None
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };
        self.dispatch(action);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.route_mouse(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);
        self.content.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.sidebar.collapsed = self.sidebar_collapsed();
        self.areas = LayoutManager::shell_layout(rect, self.sidebar_width(), self.state.show_footer);
        let areas = self.areas;

        if let Some(sidebar) = areas.sidebar {
            self.sidebar.render(f, sidebar);
        }
        self.header.render(f, areas.header);
        self.content.render(f, areas.content);
        if let Some(footer) = areas.footer {
            Footer::render(f, footer, &self.ctx);
        }
        StatusBar::render(f, areas.status, &self.ctx, self.current_page());

        // Popups draw over neighbouring regions
        self.content.render_overlay(f, rect);
        self.header.render_overlay(f, rect);

        // Render dialog on top if visible (includes help dialog)
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use ratatui::{backend::TestBackend, Terminal};

    fn app(page: Page) -> AppComponent {
        AppComponent::new(AppContext::default(), AppState::default(), page)
    }

    fn press(app: &mut AppComponent, code: KeyCode) {
        app.handle_event(EventType::Key(KeyEvent::from(code)));
    }

    fn draw(app: &mut AppComponent) {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.render(f, f.area())).unwrap();
    }

    #[test]
    fn test_q_quits() {
        let mut app = app(Page::Intro);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_shift_j_walks_pages() {
        let mut app = app(Page::Intro);
        press(&mut app, KeyCode::Char('J'));
        assert_eq!(app.current_page(), Page::Install);
        press(&mut app, KeyCode::Char('K'));
        press(&mut app, KeyCode::Char('K'));
        assert_eq!(app.current_page(), Page::Badges);
    }

    #[test]
    fn test_language_toggle_reaches_context() {
        let mut app = app(Page::Intro);
        assert_eq!(app.context().language, Language::Pt);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.context().language, Language::En);
    }

    #[test]
    fn test_esc_closes_dialog_before_quitting() {
        let mut app = app(Page::Intro);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.is_dialog_visible());
        press(&mut app, KeyCode::Esc);
        assert!(!app.is_dialog_visible());
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_sidebar_collapses_on_intro_only() {
        let mut app = app(Page::Intro);
        assert!(app.sidebar_collapsed());
        assert_eq!(app.sidebar_width(), SIDEBAR_COLLAPSED_WIDTH);
        app.dispatch(Action::Navigate(Page::Colors));
        assert!(!app.sidebar_collapsed());
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.sidebar_width(), 0);
    }

    #[test]
    fn test_confirm_result_opens_info_dialog() {
        let mut app = app(Page::Dialogs);
        draw(&mut app);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(app.is_dialog_visible());
        press(&mut app, KeyCode::Char('y'));
        // The confirm dialog is replaced by the result
        assert!(app.is_dialog_visible());
        press(&mut app, KeyCode::Enter);
        assert!(!app.is_dialog_visible());
    }

    #[test]
    fn test_slash_focuses_search() {
        let mut app = app(Page::Buttons);
        press(&mut app, KeyCode::Char('/'));
        assert!(app.is_search_focused());
        // Typing goes to the open search instead of global keys
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Esc);
        assert!(!app.is_search_focused());
    }

    #[test]
    fn test_tick_advances_spinner() {
        let mut app = app(Page::Intro);
        app.handle_event(EventType::Tick);
        app.handle_event(EventType::Tick);
        assert_eq!(app.context().tick, 2);
    }
}
