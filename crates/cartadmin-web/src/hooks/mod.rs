//! Browser hooks: viewport width and the scoped outside-click listener

mod outside_click;
mod viewport;

pub use outside_click::{closes_on_navigation, use_outside_click};
pub use viewport::use_is_mobile;
