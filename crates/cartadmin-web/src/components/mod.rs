//! Reusable UI components

pub mod breadcrumbs;
pub mod header;
pub mod icons;
pub mod sidebar;

pub use breadcrumbs::Breadcrumbs;
pub use header::Header;
pub use icons::{icon_markup, NavIcon};
pub use sidebar::Sidebar;
