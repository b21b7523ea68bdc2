//! Scoped outside-click listener
//!
//! A listener exists exactly while the sidebar is in
//! [`SidebarState::MobileOpen`]. [`ListenerSlot`] attaches one on entry,
//! detaches it on exit and detaches it when dropped, so a host cannot leak
//! a handler by forgetting a cleanup path.

use crate::visibility::SidebarState;
use tracing::debug;

/// A registered pointer-down listener that can be torn down
pub trait PointerListener {
    fn detach(&mut self);
}

/// Creates a fresh listener each time the sidebar opens on mobile
pub type ListenerFactory = Box<dyn FnMut() -> Box<dyn PointerListener>>;

/// Holds at most one live listener
pub struct ListenerSlot {
    factory: Option<ListenerFactory>,
    active: Option<Box<dyn PointerListener>>,
}

impl Default for ListenerSlot {
    fn default() -> Self {
        Self::disabled()
    }
}

impl ListenerSlot {
    pub fn new(factory: ListenerFactory) -> Self {
        Self {
            factory: Some(factory),
            active: None,
        }
    }

    /// Slot for hosts that manage the listener themselves
    pub fn disabled() -> Self {
        Self {
            factory: None,
            active: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.active.is_some()
    }

    /// Attach or detach so the slot matches `state`
    pub fn reconcile(&mut self, state: SidebarState) {
        let wanted = state.listens_for_outside_click();
        match (wanted, self.active.is_some()) {
            (true, false) => {
                if let Some(factory) = self.factory.as_mut() {
                    debug!("Attaching outside-click listener");
                    self.active = Some(factory());
                }
            }
            (false, true) => self.detach(),
            _ => {}
        }
    }

    fn detach(&mut self) {
        if let Some(mut listener) = self.active.take() {
            debug!("Detaching outside-click listener");
            listener.detach();
        }
    }
}

impl Drop for ListenerSlot {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("enabled", &self.factory.is_some())
            .field("attached", &self.is_attached())
            .finish()
    }
}
