pub mod breadcrumbs;
pub mod help_modal;
pub mod sidebar;

pub use breadcrumbs::Breadcrumbs;
pub use help_modal::HelpModal;
pub use sidebar::{row_text, SidebarPane};
