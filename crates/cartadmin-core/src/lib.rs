//! cartadmin-core - Core library for cartadmin
//!
//! Provides the navigation model, expansion state, active-route resolution
//! and responsive visibility controller behind the admin sidebar.

pub mod config;
pub mod controller;
pub mod error;
pub mod listener;
pub mod menu;
pub mod nav;
pub mod visibility;

pub use config::AdminConfig;
pub use controller::{ClickOutcome, NavController, SidebarHost};
pub use error::{CoreError, ErrorSeverity, MenuIssue, MenuReport};
pub use listener::{ListenerFactory, ListenerSlot, PointerListener};
pub use menu::{load_menu, opencart_admin, MenuDocument};
pub use nav::{
    active_path, flatten_visible, is_active, trail_for_route, ExpansionStore, Icon, IndentTier,
    Marker, NavModel, NavNode, NavPath, NavRow, ParseNavPathError, RowKind, Walk, MAX_MENU_DEPTH,
};
pub use visibility::{Breakpoint, SidebarState, Transition, VisibilityController};
