//! Terminal setup and the async event loop

use crate::config::Config;
use crate::i18n::Language;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::app_component::{AppComponent, AppState};
use crate::ui::core::{AppContext, Component, EventHandler, EventType, Page};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Where the app starts and how it talks
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub language: Language,
    pub start_page: Page,
}

impl LaunchOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            language: config.ui.language,
            start_page: config.start_page(),
        }
    }
}

/// Run the documentation browser until the user quits
pub async fn run_app(config: &Config, options: LaunchOptions, logger: Logger) -> Result<()> {
    let ctx = AppContext::new(options.language, IconService::new(config.display.icon_theme), logger);
    let mut app = AppComponent::new(ctx, AppState::from_config(config), options.start_page);
    let mut event_handler = EventHandler::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
        }

        let event = event_handler.next_event().await?;
        needs_render = match event {
            EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) => true,
            // Ticks only repaint for spinner frames, capped at ~60 FPS
            EventType::Tick => event_handler.should_render(),
            EventType::Other => false,
        };
        app.handle_event(event);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
