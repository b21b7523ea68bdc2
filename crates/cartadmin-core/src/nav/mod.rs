//! Navigation tree: model, expansion state, active resolution and rows

pub mod active;
pub mod expansion;
pub mod model;
pub mod rows;

pub use active::{active_path, is_active, trail_for_route};
pub use expansion::ExpansionStore;
pub use model::{Icon, NavModel, NavNode, NavPath, ParseNavPathError, Walk, MAX_MENU_DEPTH};
pub use rows::{flatten_visible, IndentTier, Marker, NavRow, RowKind};
