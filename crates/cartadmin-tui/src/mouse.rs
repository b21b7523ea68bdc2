//! Terminal mouse capture as the outside-click listener
//!
//! Capture is switched on only while the sidebar overlay is open, so the
//! terminal keeps native text selection the rest of the time.

use cartadmin_core::{ListenerFactory, PointerListener};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use std::io;
use tracing::{debug, warn};

/// Live mouse capture; released on detach
pub struct MouseCapture {
    active: bool,
}

impl MouseCapture {
    pub fn enable() -> Self {
        match execute!(io::stdout(), EnableMouseCapture) {
            Ok(()) => {
                debug!("Mouse capture enabled");
                Self { active: true }
            }
            Err(e) => {
                warn!(error = %e, "Failed to enable mouse capture");
                Self { active: false }
            }
        }
    }
}

impl PointerListener for MouseCapture {
    fn detach(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
            warn!(error = %e, "Failed to disable mouse capture");
        }
    }
}

/// Factory handed to [`cartadmin_core::NavController::with_listener`]
pub fn capture_factory() -> ListenerFactory {
    Box::new(|| Box::new(MouseCapture::enable()) as Box<dyn PointerListener>)
}
