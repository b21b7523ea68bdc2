//! cartadmin-tui - TUI frontend for cartadmin using Ratatui

pub mod app;
pub mod components;
pub mod mouse;
pub mod theme;
pub mod ui;

pub use app::{App, Shell};

use anyhow::{Context, Result};
use cartadmin_core::{Breakpoint, NavController, NavModel};
use crossterm::{
    event::{self, Event, KeyEventKind, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Startup settings for the TUI
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Terminal width (columns) below which the sidebar becomes an overlay
    pub breakpoint: Breakpoint,
    pub start_route: String,
    pub color: bool,
    /// Shown in the status bar
    pub menu_warnings: usize,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            breakpoint: Breakpoint::TERMINAL,
            start_route: "/".to_string(),
            color: true,
            menu_warnings: 0,
        }
    }
}

/// Run the TUI application
pub fn run(model: Arc<NavModel>, options: TuiOptions) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let width = terminal.size()?.width;
    info!(width, breakpoint = options.breakpoint.0, "Starting TUI");

    let controller = NavController::new(model, options.breakpoint, u32::from(width), false)
        .with_listener(mouse::capture_factory());
    let mut app =
        App::new(controller, &options.start_route).with_menu_warnings(options.menu_warnings);
    let mut ui = ui::Ui::new(theme::Palette::for_mode(options.color));

    let result = run_loop(&mut terminal, &mut app, &mut ui);

    // Releases mouse capture if the overlay was open
    drop(app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, ui: &mut ui::Ui) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui.render(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code, key.modifiers);
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        app.handle_mouse_down(mouse.column, mouse.row);
                    }
                }
                Event::Resize(width, _) => app.handle_resize(width),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
