//! Flattened, render-ready rows
//!
//! Walks the visible part of the tree (roots plus children of expanded
//! branches) with an explicit stack and emits one [`NavRow`] per line, in
//! pre-order. Front ends only decide how a row looks.

use super::active::is_active;
use super::expansion::ExpansionStore;
use super::model::{Icon, NavModel, NavNode, NavPath};

/// Indentation tier of a row
///
/// Three fixed nested tiers; anything deeper reuses the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndentTier {
    Root,
    First,
    Second,
    Third,
}

impl IndentTier {
    pub fn for_level(level: usize) -> Self {
        match level {
            0 => IndentTier::Root,
            1 => IndentTier::First,
            2 => IndentTier::Second,
            _ => IndentTier::Third,
        }
    }

    /// 0..=3
    pub fn index(&self) -> usize {
        match self {
            IndentTier::Root => 0,
            IndentTier::First => 1,
            IndentTier::Second => 2,
            IndentTier::Third => 3,
        }
    }
}

/// Leading glyph of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Top-level entry with an icon
    Icon(Icon),
    /// Nested entry
    Bullet,
    /// Top-level entry without an icon
    Blank,
}

impl Marker {
    pub fn for_node(node: &NavNode, level: usize) -> Self {
        match (level, node.icon) {
            (0, Some(icon)) => Marker::Icon(icon),
            (0, None) => Marker::Blank,
            _ => Marker::Bullet,
        }
    }
}

/// What clicking a row does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Toggles; `expanded` drives the chevron
    Branch { expanded: bool },
    /// Navigates
    Leaf,
}

/// One visible line of the sidebar
#[derive(Debug, Clone)]
pub struct NavRow<'a> {
    pub path: NavPath,
    pub node: &'a NavNode,
    pub level: usize,
    /// Index of the parent row in the same row list
    pub parent: Option<usize>,
    pub kind: RowKind,
    pub active: bool,
    pub indent: IndentTier,
    pub marker: Marker,
}

impl NavRow<'_> {
    pub fn label(&self) -> &str {
        &self.node.name
    }

    pub fn is_branch(&self) -> bool {
        matches!(self.kind, RowKind::Branch { .. })
    }
}

/// Visible rows for the given expansion state and route
pub fn flatten_visible<'a>(
    model: &'a NavModel,
    expansion: &ExpansionStore,
    route: &str,
) -> Vec<NavRow<'a>> {
    let mut rows = Vec::new();
    let mut stack: Vec<(NavPath, &'a NavNode, Option<usize>)> = model
        .roots()
        .iter()
        .enumerate()
        .rev()
        .map(|(i, node)| (NavPath::root(i), node, None))
        .collect();

    while let Some((path, node, parent)) = stack.pop() {
        let level = path.level();
        let expanded = node.is_branch() && expansion.is_expanded(&path);
        let kind = if node.is_branch() {
            RowKind::Branch { expanded }
        } else {
            RowKind::Leaf
        };

        let row_index = rows.len();
        if expanded {
            for (i, child) in node.children.iter().enumerate().rev() {
                stack.push((path.child(i), child, Some(row_index)));
            }
        }

        rows.push(NavRow {
            active: is_active(node, route),
            indent: IndentTier::for_level(level),
            marker: Marker::for_node(node, level),
            path,
            node,
            level,
            parent,
            kind,
        });
    }

    rows
}
