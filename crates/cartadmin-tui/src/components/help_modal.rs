//! Help modal listing the sidebar keybindings

use crate::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("j / ↓", "Next entry"),
    ("k / ↑", "Previous entry"),
    ("Enter", "Open page or expand/collapse group"),
    ("→ / l", "Expand group, or step into it"),
    ("← / h", "Collapse group, or jump to parent"),
    ("m / Ctrl+B", "Toggle the sidebar (narrow terminals)"),
    ("Esc", "Close the sidebar overlay"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

#[derive(Debug, Default)]
pub struct HelpModal {
    visible: bool,
}

impl HelpModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Render centered over `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if !self.visible {
            return;
        }

        let modal_width = 56.min(area.width);
        let modal_height = (BINDINGS.len() as u16 + 4).min(area.height);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(modal_height)) / 2),
                Constraint::Length(modal_height),
                Constraint::Min(0),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length((area.width.saturating_sub(modal_width)) / 2),
                Constraint::Length(modal_width),
                Constraint::Min(0),
            ])
            .split(vertical[1]);

        let modal_area = horizontal[1];
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(true))
            .title(Span::styled(" Help - Keybindings ", palette.active()))
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("  {:<12}", keys), palette.active()),
                    Span::raw(*action),
                ])
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            inner,
        );
    }
}
