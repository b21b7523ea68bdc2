//! Color palette for the cartadmin TUI
//!
//! - Cyan: selection, focus, the active route
//! - Yellow: warnings
//! - Gray: chrome, separators, inactive hints

use cartadmin_core::Icon;
use ratatui::style::{Color, Modifier, Style};

/// Resolved styles for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub warning: Color,
    color: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

impl Palette {
    pub fn colored() -> Self {
        Self {
            accent: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
            warning: Color::Yellow,
            color: true,
        }
    }

    /// `--no-color`: terminal defaults, emphasis through modifiers only
    pub fn monochrome() -> Self {
        Self {
            accent: Color::Reset,
            text: Color::Reset,
            muted: Color::Reset,
            warning: Color::Reset,
            color: false,
        }
    }

    pub fn for_mode(color: bool) -> Self {
        if color {
            Self::colored()
        } else {
            Self::monochrome()
        }
    }

    /// Row whose href equals the current route
    pub fn active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Cursor row in the sidebar
    pub fn selected(&self) -> Style {
        if self.color {
            Style::default()
                .bg(self.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }
}

/// Glyph drawn in front of a top-level entry
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Dashboard => "◈",
        Icon::Catalog => "▤",
        Icon::Extensions => "⧉",
        Icon::Design => "✎",
        Icon::Sales => "▲",
        Icon::Customers => "☺",
        Icon::Marketing => "✉",
        Icon::System => "⚙",
        Icon::Reports => "▥",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_a_glyph() {
        for icon in Icon::all() {
            assert_eq!(icon_glyph(*icon).chars().count(), 1);
        }
    }

    #[test]
    fn test_monochrome_uses_modifiers() {
        let palette = Palette::for_mode(false);
        assert_eq!(palette.accent, Color::Reset);
        assert!(palette.selected().add_modifier.contains(Modifier::REVERSED));
    }
}
