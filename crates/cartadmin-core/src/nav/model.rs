//! Navigation tree model
//!
//! The tree is immutable once built. Branch/leaf is never stored: it is
//! derived from whether a node has at least one child.

use crate::error::{CoreError, MenuReport};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Maximum number of levels a menu may have.
///
/// Rendering recurses per level, so a dynamically loaded menu must not be
/// allowed to nest arbitrarily.
pub const MAX_MENU_DEPTH: usize = 6;

/// Symbolic icon reference for top-level entries
///
/// Front ends map these to their own glyphs (inline SVG on the web,
/// single characters in the terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Dashboard,
    Catalog,
    Extensions,
    Design,
    Sales,
    Customers,
    Marketing,
    System,
    Reports,
}

impl Icon {
    pub fn all() -> &'static [Icon] {
        &[
            Icon::Dashboard,
            Icon::Catalog,
            Icon::Extensions,
            Icon::Design,
            Icon::Sales,
            Icon::Customers,
            Icon::Marketing,
            Icon::System,
            Icon::Reports,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Dashboard => "dashboard",
            Icon::Catalog => "catalog",
            Icon::Extensions => "extensions",
            Icon::Design => "design",
            Icon::Sales => "sales",
            Icon::Customers => "customers",
            Icon::Marketing => "marketing",
            Icon::System => "system",
            Icon::Reports => "reports",
        }
    }
}

/// One entry in the navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    /// Display label, unique among siblings
    pub name: String,

    /// Target route. `None` only for malformed entries or pure groupings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Only honoured on top-level entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

impl NavNode {
    /// Entry with a label only (no target, no children)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: None,
            icon: None,
            children: Vec::new(),
        }
    }

    pub fn leaf(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::new(name)
        }
    }

    pub fn branch(name: impl Into<String>, href: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self {
            href: Some(href.into()),
            children,
            ..Self::new(name)
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// True iff the node has one or more children
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_branch()
    }

    /// A leaf with nowhere to go: clicking it does nothing
    pub fn is_inert(&self) -> bool {
        self.is_leaf() && self.href.is_none()
    }
}

/// Stable identifier of a node: child indices from the root list down
///
/// `[1, 0]` is the first child of the second root entry. Unlike labels,
/// paths never collide, so two entries both named "Returns" keep separate
/// expansion state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavPath(Vec<usize>);

impl NavPath {
    /// Path of the `index`-th root entry
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn from_indices(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    /// Path of the `index`-th child of this node
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Zero-based level (0 = top-level entry)
    pub fn level(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn is_ancestor_of(&self, other: &NavPath) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }
}

impl fmt::Display for NavPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Error parsing a dotted path such as `6.2.0`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid menu path '{input}' (expected dot-separated indices like 1.0)")]
pub struct ParseNavPathError {
    pub input: String,
}

impl FromStr for NavPath {
    type Err = ParseNavPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseNavPathError {
            input: s.to_string(),
        };
        if s.trim().is_empty() {
            return Err(err());
        }
        s.trim()
            .split('.')
            .map(|part| part.parse::<usize>().map_err(|_| err()))
            .collect::<Result<Vec<_>, _>>()
            .map(NavPath)
    }
}

/// Validated, read-only navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavModel {
    items: Vec<NavNode>,
}

impl NavModel {
    /// Build a model, rejecting trees nested deeper than [`MAX_MENU_DEPTH`]
    pub fn new(items: Vec<NavNode>) -> Result<Self, CoreError> {
        let model = Self { items };
        if let Some((path, node)) = model
            .walk()
            .find(|(path, _)| path.level() >= MAX_MENU_DEPTH)
        {
            return Err(CoreError::MenuTooDeep {
                name: node.name.clone(),
                path: path.to_string(),
                max_depth: MAX_MENU_DEPTH,
            });
        }
        Ok(model)
    }

    /// Menus authored in code skip the depth check outside debug builds
    pub(crate) fn from_static(items: Vec<NavNode>) -> Self {
        let model = Self { items };
        debug_assert!(model.walk().all(|(path, _)| path.level() < MAX_MENU_DEPTH));
        model
    }

    pub fn roots(&self) -> &[NavNode] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    pub fn node_at(&self, path: &NavPath) -> Option<&NavNode> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.items.get(*first)?;
        for index in rest {
            node = node.children.get(*index)?;
        }
        Some(node)
    }

    /// Pre-order iterator over every node, regardless of expansion
    pub fn walk(&self) -> Walk<'_> {
        let stack = self
            .items
            .iter()
            .enumerate()
            .rev()
            .map(|(i, node)| (NavPath::root(i), node))
            .collect();
        Walk { stack }
    }

    /// First node (pre-order) whose href equals `route` exactly
    pub fn find_by_href(&self, route: &str) -> Option<NavPath> {
        self.walk()
            .find(|(_, node)| node.href.as_deref() == Some(route))
            .map(|(path, _)| path)
    }

    /// Nodes from the root entry down to `path`, inclusive
    pub fn trail(&self, path: &NavPath) -> Vec<&NavNode> {
        let mut trail = Vec::with_capacity(path.indices().len());
        let mut children = self.items.as_slice();
        for index in path.indices() {
            match children.get(*index) {
                Some(node) => {
                    trail.push(node);
                    children = &node.children;
                }
                None => return Vec::new(),
            }
        }
        trail
    }

    /// Labels used by more than one node, with every path carrying them
    ///
    /// Harmless for the path-keyed expansion store, but a hazard for any
    /// consumer that identifies entries by label.
    pub fn duplicate_names(&self) -> Vec<(String, Vec<NavPath>)> {
        let mut by_name: HashMap<&str, Vec<NavPath>> = HashMap::new();
        for (path, node) in self.walk() {
            by_name.entry(node.name.as_str()).or_default().push(path);
        }
        let mut duplicates: Vec<(String, Vec<NavPath>)> = by_name
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(name, paths)| (name.to_string(), paths))
            .collect();
        duplicates.sort_by(|a, b| a.1[0].cmp(&b.1[0]));
        duplicates
    }

    /// Collect soft problems: inert entries, nested icons, duplicate labels
    pub fn validate(&self) -> MenuReport {
        let mut report = MenuReport::new();

        for (path, node) in self.walk() {
            report.nodes_scanned += 1;
            report.max_depth_seen = report.max_depth_seen.max(path.level() + 1);

            if node.is_inert() {
                warn!(path = %path, name = %node.name, "Menu entry has neither href nor children");
                report.add_issue(
                    crate::error::MenuIssue::warning(
                        path.to_string(),
                        format!("'{}' has neither href nor children and will be inert", node.name),
                    )
                    .with_suggestion("Add an href or at least one child entry"),
                );
            }

            if path.level() > 0 && node.icon.is_some() {
                report.add_warning(
                    path.to_string(),
                    format!("Icon on nested entry '{}' is ignored", node.name),
                );
            }
        }

        for (name, paths) in self.duplicate_names() {
            let where_: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
            warn!(name = %name, paths = ?where_, "Duplicate menu label");
            report.add_warning(
                where_.join(", "),
                format!("Label '{}' is used by {} entries", name, paths.len()),
            );
        }

        report
    }
}

/// Pre-order traversal with an explicit stack
pub struct Walk<'a> {
    stack: Vec<(NavPath, &'a NavNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (NavPath, &'a NavNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        for (i, child) in node.children.iter().enumerate().rev() {
            self.stack.push((path.child(i), child));
        }
        Some((path, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_menu() -> NavModel {
        NavModel::new(vec![
            NavNode::leaf("Dashboard", "/").with_icon(Icon::Dashboard),
            NavNode::branch(
                "Catalog",
                "/catalog",
                vec![
                    NavNode::leaf("Products", "/catalog/products"),
                    NavNode::leaf("Categories", "/catalog/categories"),
                ],
            )
            .with_icon(Icon::Catalog),
        ])
        .unwrap()
    }

    fn nested(depth: usize) -> NavNode {
        let mut node = NavNode::leaf(format!("Level {}", depth - 1), "/deep");
        for level in (0..depth - 1).rev() {
            node = NavNode::branch(format!("Level {}", level), "/deep", vec![node]);
        }
        node
    }

    #[test]
    fn test_branch_and_leaf_derived_from_children() {
        let leaf = NavNode::leaf("Products", "/catalog/products");
        let empty_branch = NavNode::branch("Catalog", "/catalog", vec![]);
        let branch = NavNode::branch("Catalog", "/catalog", vec![leaf.clone()]);

        assert!(leaf.is_leaf());
        assert!(empty_branch.is_leaf());
        assert!(!empty_branch.is_branch());
        assert!(branch.is_branch());
    }

    #[test]
    fn test_walk_is_pre_order_in_model_order() {
        let model = catalog_menu();
        let names: Vec<_> = model.walk().map(|(_, n)| n.name.as_str()).collect();
        assert_eq!(names, vec!["Dashboard", "Catalog", "Products", "Categories"]);
    }

    #[test]
    fn test_node_at_and_trail() {
        let model = catalog_menu();
        let path = NavPath::from_indices(vec![1, 1]);
        assert_eq!(model.node_at(&path).unwrap().name, "Categories");

        let trail: Vec<_> = model.trail(&path).iter().map(|n| n.name.clone()).collect();
        assert_eq!(trail, vec!["Catalog", "Categories"]);

        assert!(model.node_at(&NavPath::from_indices(vec![1, 5])).is_none());
        assert!(model.trail(&NavPath::from_indices(vec![7])).is_empty());
    }

    #[test]
    fn test_find_by_href_is_exact() {
        let model = catalog_menu();
        assert_eq!(
            model.find_by_href("/catalog/products"),
            Some(NavPath::from_indices(vec![1, 0]))
        );
        assert_eq!(model.find_by_href("/catalog/products/"), None);
        assert_eq!(model.find_by_href("/Catalog"), None);
    }

    #[test]
    fn test_depth_bound() {
        assert!(NavModel::new(vec![nested(MAX_MENU_DEPTH)]).is_ok());

        let err = NavModel::new(vec![nested(MAX_MENU_DEPTH + 1)]).unwrap_err();
        match err {
            CoreError::MenuTooDeep { name, max_depth, .. } => {
                assert_eq!(name, "Level 6");
                assert_eq!(max_depth, MAX_MENU_DEPTH);
            }
            other => panic!("Expected MenuTooDeep, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_names_reported_with_paths() {
        let model = NavModel::new(vec![
            NavNode::branch("Sales", "/sales", vec![NavNode::leaf("Returns", "/sale/returns")]),
            NavNode::branch(
                "System",
                "/system",
                vec![NavNode::branch(
                    "Returns",
                    "/localisation/returns",
                    vec![NavNode::leaf("Return Reasons", "/localisation/return-reasons")],
                )],
            ),
        ])
        .unwrap();

        let dups = model.duplicate_names();
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].0, "Returns");
        assert_eq!(
            dups[0].1,
            vec![
                NavPath::from_indices(vec![0, 0]),
                NavPath::from_indices(vec![1, 0])
            ]
        );
    }

    #[test]
    fn test_validate_flags_inert_and_nested_icons() {
        let model = NavModel::new(vec![
            NavNode::new("Orphan"),
            NavNode::branch(
                "Catalog",
                "/catalog",
                vec![NavNode::leaf("Products", "/catalog/products").with_icon(Icon::Catalog)],
            ),
        ])
        .unwrap();

        let report = model.validate();
        assert_eq!(report.nodes_scanned, 3);
        assert_eq!(report.max_depth_seen, 2);
        assert_eq!(report.warnings().count(), 2);
        assert!(!report.has_fatal_errors());
        assert!(model.roots()[0].is_inert());
    }

    #[test]
    fn test_nav_path_parse_and_display() {
        let path: NavPath = "6.2.0".parse().unwrap();
        assert_eq!(path.indices(), &[6, 2, 0]);
        assert_eq!(path.to_string(), "6.2.0");
        assert_eq!(path.level(), 2);
        assert_eq!(path.parent(), Some(NavPath::from_indices(vec![6, 2])));
        assert!(NavPath::root(6).is_ancestor_of(&path));
        assert!(!path.is_ancestor_of(&path));

        assert!("".parse::<NavPath>().is_err());
        assert!("1.x".parse::<NavPath>().is_err());
    }

    #[test]
    fn test_node_serde_skips_empty_fields() {
        let json = serde_json::to_string(&NavNode::leaf("Products", "/catalog/products")).unwrap();
        assert_eq!(json, r#"{"name":"Products","href":"/catalog/products"}"#);

        let node: NavNode =
            serde_json::from_str(r#"{"name":"Catalog","icon":"catalog","children":[{"name":"A","href":"/a"}]}"#)
                .unwrap();
        assert_eq!(node.icon, Some(Icon::Catalog));
        assert!(node.is_branch());
        assert!(node.href.is_none());
    }
}
