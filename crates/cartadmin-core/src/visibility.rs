//! Responsive sidebar visibility
//!
//! ```text
//! Desktop       width >= breakpoint          always visible, no overlay
//! MobileClosed  width <  breakpoint, closed  off-screen
//! MobileOpen    width <  breakpoint, open    on-screen, overlay, outside-click listener
//! ```
//!
//! `is_open` belongs to the host. The controller only mirrors it and tells
//! the host when a dismissal condition is met.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Width threshold between mobile and desktop layouts
///
/// Unit-agnostic: CSS pixels on the web, columns in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoint(pub u32);

impl Breakpoint {
    /// Default web breakpoint (CSS px)
    pub const WEB: Breakpoint = Breakpoint(1024);
    /// Default terminal breakpoint (columns)
    pub const TERMINAL: Breakpoint = Breakpoint(100);

    pub fn is_mobile(&self, width: u32) -> bool {
        width < self.0
    }
}

/// Layout state of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SidebarState {
    Desktop,
    MobileClosed,
    MobileOpen,
}

impl SidebarState {
    pub fn resolve(is_mobile: bool, is_open: bool) -> Self {
        match (is_mobile, is_open) {
            (false, _) => SidebarState::Desktop,
            (true, false) => SidebarState::MobileClosed,
            (true, true) => SidebarState::MobileOpen,
        }
    }

    pub fn is_mobile(&self) -> bool {
        !matches!(self, SidebarState::Desktop)
    }

    /// Sidebar translated into view
    pub fn on_screen(&self) -> bool {
        !matches!(self, SidebarState::MobileClosed)
    }

    pub fn overlay_visible(&self) -> bool {
        matches!(self, SidebarState::MobileOpen)
    }

    pub fn listens_for_outside_click(&self) -> bool {
        matches!(self, SidebarState::MobileOpen)
    }

    /// Leaf clicks and outside pointer-downs dismiss only in this state
    pub fn dismissible(&self) -> bool {
        matches!(self, SidebarState::MobileOpen)
    }
}

impl fmt::Display for SidebarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SidebarState::Desktop => "desktop",
            SidebarState::MobileClosed => "mobile-closed",
            SidebarState::MobileOpen => "mobile-open",
        };
        f.write_str(name)
    }
}

/// Result of feeding an input into the visibility controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: SidebarState,
    pub to: SidebarState,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Reconciles the host's `is_open` flag with the viewport width
#[derive(Debug, Clone)]
pub struct VisibilityController {
    breakpoint: Breakpoint,
    width: u32,
    is_open: bool,
}

impl VisibilityController {
    pub fn new(breakpoint: Breakpoint, width: u32, is_open: bool) -> Self {
        Self {
            breakpoint,
            width,
            is_open,
        }
    }

    pub fn state(&self) -> SidebarState {
        SidebarState::resolve(self.breakpoint.is_mobile(self.width), self.is_open)
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Recompute the breakpoint flag for a new viewport width
    pub fn resize(&mut self, width: u32) -> Transition {
        let from = self.state();
        self.width = width;
        self.transition(from, "resize")
    }

    /// Mirror the host's open flag
    pub fn set_open(&mut self, is_open: bool) -> Transition {
        let from = self.state();
        self.is_open = is_open;
        self.transition(from, "set_open")
    }

    /// Whether a pointer-down should dismiss the sidebar
    pub fn closes_on_pointer_down(&self, inside_sidebar: bool) -> bool {
        self.state().dismissible() && !inside_sidebar
    }

    /// Whether navigating from a leaf should also dismiss the sidebar
    pub fn closes_on_leaf_click(&self) -> bool {
        self.state().dismissible()
    }

    fn transition(&self, from: SidebarState, cause: &str) -> Transition {
        let transition = Transition {
            from,
            to: self.state(),
        };
        if transition.changed() {
            debug!(from = %transition.from, to = %transition.to, cause, "Sidebar state changed");
        }
        transition
    }
}
