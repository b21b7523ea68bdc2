//! TUI rendering logic

use crate::app::App;
use crate::components::{Breadcrumbs, SidebarPane};
use crate::theme::Palette;
use cartadmin_core::{trail_for_route, SidebarState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Sidebar column width, docked or as an overlay
const SIDEBAR_WIDTH: u16 = 34;

/// Main UI renderer
pub struct Ui {
    breadcrumbs: Breadcrumbs,
    palette: Palette,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl Ui {
    pub fn new(palette: Palette) -> Self {
        Self {
            breadcrumbs: Breadcrumbs::new().with_palette(palette),
            palette,
        }
    }

    /// Render the full UI
    pub fn render(&mut self, frame: &mut Frame, app: &mut App) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header + breadcrumbs
                Constraint::Min(0),    // Sidebar + page
                Constraint::Length(1), // Status bar
            ])
            .split(size);

        let trail = trail_for_route(app.controller.model(), &app.shell.route);

        self.render_header(frame, chunks[0], app, trail.clone());

        match app.state() {
            SidebarState::Desktop => {
                let body = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                    .split(chunks[1]);
                self.render_sidebar(frame, body[0], app);
                self.render_page(frame, body[1], app, &trail);
            }
            SidebarState::MobileClosed => {
                app.sidebar_area = None;
                self.render_page(frame, chunks[1], app, &trail);
            }
            SidebarState::MobileOpen => {
                self.render_page(frame, chunks[1], app, &trail);

                // Backdrop: dim the page underneath
                frame
                    .buffer_mut()
                    .set_style(chunks[1], Style::default().add_modifier(Modifier::DIM));

                let overlay = Rect {
                    width: SIDEBAR_WIDTH.min(chunks[1].width),
                    ..chunks[1]
                };
                frame.render_widget(Clear, overlay);
                self.render_sidebar(frame, overlay, app);
            }
        }

        self.render_status_bar(frame, chunks[2], app);

        app.help_modal.render(frame, size, &self.palette);
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect, app: &App, trail: Vec<String>) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.palette.border(false));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let mut logo = Vec::new();
        if app.state().is_mobile() {
            let hamburger = if app.state().overlay_visible() {
                "✕ "
            } else {
                "☰ "
            };
            logo.push(Span::styled(hamburger, self.palette.active()));
        }
        logo.push(Span::styled("◈ ", self.palette.active()));
        logo.push(Span::styled("cartadmin", self.palette.title()));
        logo.push(Span::styled("  OpenCart administration", self.palette.hint()));
        frame.render_widget(Paragraph::new(Line::from(logo)), rows[0]);

        self.breadcrumbs.set_trail(trail);
        self.breadcrumbs.render(frame, rows[1]);
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let rows = app.controller.rows(&app.shell.route);
        SidebarPane::new(&rows, self.palette).render(frame, area, &mut app.list_state);
        app.sidebar_area = Some(area);
    }

    fn render_page(&self, frame: &mut Frame, area: Rect, app: &App, trail: &[String]) {
        let title = trail.last().map(String::as_str).unwrap_or("Not found");

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border(false))
            .title(Span::styled(format!(" {} ", title), self.palette.title()));

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Route   ", self.palette.hint()),
                Span::raw(app.shell.route.clone()),
            ]),
            Line::from(""),
        ];

        if trail.is_empty() {
            lines.push(Line::from(Span::styled(
                "No menu entry points at this route.",
                Style::default().fg(self.palette.warning),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled("Section ", self.palette.hint()),
                Span::raw(trail.join(" › ")),
            ]));
        }

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(32)])
            .split(area);

        let left = match &app.status_message {
            Some(message) => Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(self.palette.warning),
            )),
            None => Line::from(Span::styled(
                " ? help  q quit  m menu  Enter open",
                self.palette.hint(),
            )),
        };
        frame.render_widget(Paragraph::new(left), chunks[0]);

        let mut right = Vec::new();
        if app.menu_warnings > 0 {
            right.push(Span::styled(
                format!("⚠ {} ", app.menu_warnings),
                Style::default().fg(self.palette.warning),
            ));
        }
        right.push(Span::styled(format!("{} ", app.state()), self.palette.hint()));
        frame.render_widget(
            Paragraph::new(Line::from(right)).alignment(Alignment::Right),
            chunks[1],
        );
    }
}
