//! Navigation tree controller
//!
//! Owns the expansion store, the visibility state and the outside-click
//! listener slot for one sidebar instance. The host keeps the route and the
//! open flag and is reached through [`SidebarHost`].

use crate::listener::{ListenerFactory, ListenerSlot};
use crate::nav::{active_path, flatten_visible, ExpansionStore, NavModel, NavPath, NavRow};
use crate::visibility::{Breakpoint, SidebarState, Transition, VisibilityController};
use std::sync::Arc;
use tracing::{debug, warn};

/// Callbacks from the controller into the embedding application
pub trait SidebarHost {
    /// Route to `href`. The controller does not own routing.
    fn navigate(&mut self, href: &str);

    /// Hide the sidebar (mobile dismissal)
    fn close(&mut self);
}

/// What a click on an entry resulted in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Branch expansion flipped
    Toggled { path: NavPath, expanded: bool },
    /// Leaf navigated; `closed` when the sidebar was dismissed as well
    Navigated { href: String, closed: bool },
    /// Leaf without a target
    Inert,
    /// No entry at that path
    Missing,
}

/// Sidebar state for one mounted instance
#[derive(Debug)]
pub struct NavController {
    model: Arc<NavModel>,
    expansion: ExpansionStore,
    visibility: VisibilityController,
    listener: ListenerSlot,
}

impl NavController {
    /// Mount a controller: everything collapsed, no listener yet
    pub fn new(model: Arc<NavModel>, breakpoint: Breakpoint, width: u32, is_open: bool) -> Self {
        Self {
            model,
            expansion: ExpansionStore::new(),
            visibility: VisibilityController::new(breakpoint, width, is_open),
            listener: ListenerSlot::disabled(),
        }
    }

    /// Install the outside-click listener factory
    ///
    /// Attaches immediately if the sidebar is already open on mobile.
    pub fn with_listener(mut self, factory: ListenerFactory) -> Self {
        self.listener = ListenerSlot::new(factory);
        self.listener.reconcile(self.state());
        self
    }

    pub fn model(&self) -> &NavModel {
        &self.model
    }

    pub fn expansion(&self) -> &ExpansionStore {
        &self.expansion
    }

    pub fn state(&self) -> SidebarState {
        self.visibility.state()
    }

    pub fn visibility(&self) -> &VisibilityController {
        &self.visibility
    }

    pub fn listener_attached(&self) -> bool {
        self.listener.is_attached()
    }

    /// Visible rows in render order
    pub fn rows(&self, route: &str) -> Vec<NavRow<'_>> {
        flatten_visible(&self.model, &self.expansion, route)
    }

    pub fn is_expanded(&self, path: &NavPath) -> bool {
        self.expansion.is_expanded(path)
    }

    /// Flip a branch. Returns the new expanded state.
    pub fn toggle(&mut self, path: &NavPath) -> bool {
        let expanded = self.expansion.toggle(path);
        debug!(path = %path, expanded, "Toggled menu entry");
        expanded
    }

    /// Expand the ancestors of the entry active for `route`
    pub fn reveal_route(&mut self, route: &str) -> Option<NavPath> {
        let path = active_path(&self.model, route)?;
        self.expansion.reveal(&path);
        debug!(route, path = %path, "Revealed active entry");
        Some(path)
    }

    /// Handle a click on the entry at `path`
    pub fn click(&mut self, path: &NavPath, host: &mut impl SidebarHost) -> ClickOutcome {
        let Some(node) = self.model.node_at(path) else {
            debug!(path = %path, "Click on missing menu entry");
            return ClickOutcome::Missing;
        };

        if node.is_branch() {
            let expanded = self.toggle(path);
            return ClickOutcome::Toggled {
                path: path.clone(),
                expanded,
            };
        }

        let Some(href) = node.href.clone() else {
            warn!(path = %path, name = %node.name, "Menu entry has no target, ignoring click");
            return ClickOutcome::Inert;
        };

        host.navigate(&href);
        let closed = self.visibility.closes_on_leaf_click();
        if closed {
            host.close();
            self.set_open(false);
        }
        ClickOutcome::Navigated { href, closed }
    }

    /// Handle a pointer-down reported by the outside-click listener
    ///
    /// Returns true when the host was asked to close. The controller is
    /// already `MobileClosed` with the listener detached when this returns.
    pub fn pointer_down(&mut self, inside_sidebar: bool, host: &mut impl SidebarHost) -> bool {
        if self.visibility.closes_on_pointer_down(inside_sidebar) {
            debug!("Pointer-down outside sidebar, closing");
            host.close();
            self.set_open(false);
            true
        } else {
            false
        }
    }

    /// Mirror the host's open flag (hamburger toggle, explicit close, ...)
    pub fn set_open(&mut self, is_open: bool) -> Transition {
        let transition = self.visibility.set_open(is_open);
        self.listener.reconcile(transition.to);
        transition
    }

    /// Viewport width changed
    pub fn resize(&mut self, width: u32) -> Transition {
        let transition = self.visibility.resize(width);
        self.listener.reconcile(transition.to);
        transition
    }
}
