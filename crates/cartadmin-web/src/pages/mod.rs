//! Page components

mod admin;

pub use admin::AdminPage;
