//! TUI application state and input handling

use crate::components::HelpModal;
use cartadmin_core::{ClickOutcome, NavController, NavPath, SidebarHost, SidebarState};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;
use tracing::debug;

/// What the sidebar controller may change: the route and the hamburger flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub route: String,
    pub sidebar_open: bool,
}

impl SidebarHost for Shell {
    fn navigate(&mut self, href: &str) {
        debug!(route = href, "Navigating");
        self.route = href.to_string();
    }

    fn close(&mut self) {
        self.sidebar_open = false;
    }
}

/// TUI Application state
pub struct App {
    pub controller: NavController,

    pub shell: Shell,

    /// Cursor over the visible rows (selection + scroll)
    pub list_state: ListState,

    pub help_modal: HelpModal,

    /// Whether the app should quit
    pub should_quit: bool,

    /// One-shot message for the status bar
    pub status_message: Option<String>,

    /// Warnings reported while loading the menu
    pub menu_warnings: usize,

    /// Where the sidebar was last drawn, for mouse hit-testing
    pub sidebar_area: Option<Rect>,
}

impl App {
    /// Start on `start_route` with its ancestors expanded and its row selected
    pub fn new(mut controller: NavController, start_route: &str) -> Self {
        let active = controller.reveal_route(start_route);
        let selected = active
            .and_then(|path| {
                controller
                    .rows(start_route)
                    .iter()
                    .position(|row| row.path == path)
            })
            .unwrap_or(0);

        Self {
            shell: Shell {
                route: start_route.to_string(),
                sidebar_open: controller.visibility().is_open(),
            },
            controller,
            list_state: ListState::default().with_selected(Some(selected)),
            help_modal: HelpModal::new(),
            should_quit: false,
            status_message: None,
            menu_warnings: 0,
            sidebar_area: None,
        }
    }

    pub fn with_menu_warnings(mut self, count: usize) -> Self {
        self.menu_warnings = count;
        self
    }

    pub fn state(&self) -> SidebarState {
        self.controller.state()
    }

    pub fn row_count(&self) -> usize {
        self.controller.rows(&self.shell.route).len()
    }

    pub fn selected_index(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    pub fn selected_path(&self) -> Option<NavPath> {
        self.controller
            .rows(&self.shell.route)
            .get(self.selected_index())
            .map(|row| row.path.clone())
    }

    /// Handle keyboard input
    /// Returns true if the key was handled
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.help_modal.is_visible() {
            if matches!(key, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.help_modal.hide();
            }
            return true;
        }

        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('?') => {
                self.help_modal.toggle();
                true
            }
            KeyCode::Char('m') => {
                self.toggle_sidebar();
                true
            }
            KeyCode::Char('b') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_sidebar();
                true
            }
            KeyCode::Esc => {
                self.close_sidebar();
                true
            }
            _ if !self.state().on_screen() => {
                if matches!(
                    key,
                    KeyCode::Up | KeyCode::Down | KeyCode::Enter | KeyCode::Char('j' | 'k')
                ) {
                    self.status_message = Some("Menu hidden, press m to open it".to_string());
                    return true;
                }
                false
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate_selected();
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.step_in();
                true
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.step_out();
                true
            }
            _ => false,
        }
    }

    /// Left button pressed at (`column`, `row`)
    ///
    /// Only delivered while mouse capture is on, i.e. in the mobile overlay.
    pub fn handle_mouse_down(&mut self, column: u16, row: u16) {
        let inside = self
            .sidebar_area
            .is_some_and(|area| area.contains(Position::new(column, row)));

        if self.controller.pointer_down(inside, &mut self.shell) {
            self.sync_open();
            return;
        }

        if let Some(index) = self.row_at(row) {
            self.list_state.select(Some(index));
            self.activate_selected();
        }
    }

    pub fn handle_resize(&mut self, width: u16) {
        let transition = self.controller.resize(u32::from(width));
        if transition.changed() && !transition.to.on_screen() {
            self.sidebar_area = None;
        }
    }

    /// Hamburger button
    pub fn toggle_sidebar(&mut self) {
        self.shell.sidebar_open = !self.shell.sidebar_open;
        self.sync_open();
    }

    /// Explicit close request; only meaningful in the mobile overlay
    pub fn close_sidebar(&mut self) {
        if self.state().dismissible() {
            self.shell.close();
            self.sync_open();
        }
    }

    fn sync_open(&mut self) {
        self.controller.set_open(self.shell.sidebar_open);
        if !self.state().on_screen() {
            self.sidebar_area = None;
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        let current = self.selected_index() as isize;
        let next = (current + delta).clamp(0, count as isize - 1);
        self.list_state.select(Some(next as usize));
    }

    fn activate_selected(&mut self) {
        let Some(path) = self.selected_path() else {
            return;
        };

        match self.controller.click(&path, &mut self.shell) {
            ClickOutcome::Navigated { closed, .. } => {
                self.status_message = None;
                if closed {
                    self.sync_open();
                }
            }
            ClickOutcome::Inert => {
                let name = self
                    .controller
                    .model()
                    .node_at(&path)
                    .map(|node| node.name.clone())
                    .unwrap_or_default();
                self.status_message = Some(format!("'{}' has no page", name));
            }
            ClickOutcome::Toggled { .. } | ClickOutcome::Missing => {}
        }
        self.clamp_selection();
    }

    /// Expand a collapsed group, or move onto the first child of an open one
    fn step_in(&mut self) {
        let Some(path) = self.selected_path() else {
            return;
        };
        let is_branch = self
            .controller
            .model()
            .node_at(&path)
            .is_some_and(|node| node.is_branch());
        if !is_branch {
            return;
        }

        if self.controller.is_expanded(&path) {
            self.move_selection(1);
        } else {
            self.controller.toggle(&path);
        }
    }

    /// Collapse an open group, or move onto the parent entry
    fn step_out(&mut self) {
        let index = self.selected_index();
        let rows = self.controller.rows(&self.shell.route);
        let Some(row) = rows.get(index) else {
            return;
        };

        if row.is_branch() && self.controller.is_expanded(&row.path) {
            let path = row.path.clone();
            drop(rows);
            self.controller.toggle(&path);
        } else if let Some(parent) = row.parent {
            drop(rows);
            self.list_state.select(Some(parent));
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.row_count();
        if self.selected_index() >= count {
            self.list_state.select(count.checked_sub(1));
        }
    }

    /// Row index under terminal line `y`, inside the sidebar border
    fn row_at(&self, y: u16) -> Option<usize> {
        let area = self.sidebar_area?;
        let top = area.y + 1;
        let bottom = area.y + area.height.saturating_sub(1);
        if y < top || y >= bottom {
            return None;
        }
        let index = self.list_state.offset() + usize::from(y - top);
        (index < self.row_count()).then_some(index)
    }
}
