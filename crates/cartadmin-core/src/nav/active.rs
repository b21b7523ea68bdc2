//! Active route resolution
//!
//! Highlighting is exact string equality between an entry's href and the
//! current route. Ancestors of the active entry are NOT considered active;
//! breadcrumbs use [`trail_for_route`] instead.

use super::model::{NavModel, NavNode, NavPath};

/// True iff `node.href` equals `route` exactly
pub fn is_active(node: &NavNode, route: &str) -> bool {
    node.href.as_deref() == Some(route)
}

/// Path of the first entry (pre-order) that is active for `route`
pub fn active_path(model: &NavModel, route: &str) -> Option<NavPath> {
    model.find_by_href(route)
}

/// Labels from the top-level entry down to the active entry
///
/// Empty when no entry matches the route.
pub fn trail_for_route(model: &NavModel, route: &str) -> Vec<String> {
    active_path(model, route)
        .map(|path| model.trail(&path).iter().map(|n| n.name.clone()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> NavModel {
        NavModel::new(vec![
            NavNode::leaf("Dashboard", "/"),
            NavNode::branch(
                "Catalog",
                "/catalog",
                vec![NavNode::leaf("Products", "/catalog/products")],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_match_only() {
        let products = NavNode::leaf("Products", "/catalog/products");
        assert!(is_active(&products, "/catalog/products"));
        assert!(!is_active(&products, "/catalog/products/"));
        assert!(!is_active(&products, "/Catalog/Products"));
        assert!(!is_active(&products, "/catalog"));
        assert!(!is_active(&NavNode::new("Orphan"), ""));
    }

    #[test]
    fn test_ancestor_not_active() {
        let model = model();
        let route = "/catalog/products";

        let active: Vec<_> = model
            .walk()
            .filter(|(_, node)| is_active(node, route))
            .map(|(_, node)| node.name.as_str())
            .collect();

        assert_eq!(active, vec!["Products"]);
        assert_eq!(active_path(&model, route), Some(NavPath::from_indices(vec![1, 0])));
    }

    #[test]
    fn test_trail_for_route() {
        let model = model();
        assert_eq!(trail_for_route(&model, "/catalog/products"), vec!["Catalog", "Products"]);
        assert_eq!(trail_for_route(&model, "/"), vec!["Dashboard"]);
        assert!(trail_for_route(&model, "/nowhere").is_empty());
    }
}
