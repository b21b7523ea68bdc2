//! CLI commands for menu inspection
//!
//! Provides the menu, check, and resolve commands on top of the core controller.

use cartadmin_core::{
    active_path, flatten_visible, trail_for_route, ErrorSeverity, ExpansionStore, MenuReport,
    NavModel, NavPath, ParseNavPathError, RowKind,
};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug)]
pub enum CliError {
    InvalidPath(ParseNavPathError),
    UnknownPath { path: NavPath },
    NotABranch { path: NavPath, name: String },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::InvalidPath(e) => write!(f, "{}", e),
            CliError::UnknownPath { path } => {
                write!(f, "No menu entry at path {}", path)
            }
            CliError::NotABranch { path, name } => {
                write!(f, "'{}' ({}) has no children to expand", name, path)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<ParseNavPathError> for CliError {
    fn from(e: ParseNavPathError) -> Self {
        CliError::InvalidPath(e)
    }
}

// ============================================================================
// Expansion
// ============================================================================

/// Build the expansion state for `menu` from `--expand` paths and `--route`
///
/// Every `--expand` path must name a branch. The route's ancestors are
/// expanded as well so the active entry is visible.
pub fn expansion_for(
    model: &NavModel,
    expand: &[String],
    route: &str,
    all: bool,
) -> Result<ExpansionStore, CliError> {
    let mut store = ExpansionStore::new();

    if all {
        for (path, node) in model.walk() {
            if node.is_branch() {
                store.expand(path);
            }
        }
    }

    for raw in expand {
        let path: NavPath = raw.parse()?;
        let node = model
            .node_at(&path)
            .ok_or_else(|| CliError::UnknownPath { path: path.clone() })?;
        if !node.is_branch() {
            return Err(CliError::NotABranch {
                name: node.name.clone(),
                path,
            });
        }
        store.reveal(&path);
        store.expand(path);
    }

    if let Some(active) = active_path(model, route) {
        store.reveal(&active);
    }

    Ok(store)
}

// ============================================================================
// Formatters
// ============================================================================

/// Format the visible menu as a table (human) or the whole menu as JSON
pub fn format_menu_tree(
    model: &NavModel,
    expansion: &ExpansionStore,
    route: &str,
    json: bool,
    no_color: bool,
) -> String {
    if json {
        return serde_json::to_string_pretty(&model.to_document())
            .unwrap_or_else(|_| "{}".to_string());
    }

    if model.is_empty() {
        return "Menu is empty.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header(&["Path", "Entry", "Target", ""], no_color));

    for row in flatten_visible(model, expansion, route) {
        let chevron = match row.kind {
            RowKind::Branch { expanded: true } => " ▾",
            RowKind::Branch { expanded: false } => " ▸",
            RowKind::Leaf => "",
        };
        let entry = format!(
            "{}{}{}",
            "  ".repeat(row.indent.index()),
            row.label(),
            chevron
        );
        let target = row.node.href.clone().unwrap_or_else(|| "-".to_string());
        let state = if row.active {
            "active"
        } else if row.node.is_inert() {
            "inert"
        } else {
            ""
        };

        let mut entry_cell = Cell::new(entry);
        if row.active && !no_color {
            entry_cell = entry_cell.fg(Color::Green);
        }

        table.add_row(Row::from(vec![
            Cell::new(row.path.to_string()),
            entry_cell,
            Cell::new(target),
            Cell::new(state),
        ]));
    }

    table.to_string()
}

/// Format a validation report
pub fn format_report(report: &MenuReport, no_color: bool) -> String {
    let summary = format!(
        "{} entries, {} levels deep",
        report.nodes_scanned, report.max_depth_seen
    );

    if !report.has_issues() {
        return format!("Menu OK ({})", summary);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header(&["Severity", "Source", "Problem", "Suggestion"], no_color));

    for issue in &report.issues {
        let mut severity = Cell::new(issue.severity.label());
        if !no_color {
            severity = severity.fg(match issue.severity {
                ErrorSeverity::Warning => Color::Yellow,
                ErrorSeverity::Fatal => Color::Red,
            });
        }
        table.add_row(Row::from(vec![
            severity,
            Cell::new(&issue.source),
            Cell::new(&issue.message),
            Cell::new(issue.suggestion.as_deref().unwrap_or("-")),
        ]));
    }

    let (warnings, fatal) = report.issue_count();
    format!(
        "{}\n{} warning(s), {} fatal ({})",
        table, warnings, fatal, summary
    )
}

/// Format the entry a route resolves to (human or JSON)
pub fn format_resolve(model: &NavModel, route: &str, json: bool) -> String {
    let active = active_path(model, route);
    let trail = trail_for_route(model, route);

    if json {
        let value = serde_json::json!({
            "route": route,
            "active_path": active.as_ref().map(|p| p.to_string()),
            "trail": trail,
        });
        return serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string());
    }

    match active {
        Some(path) => {
            let mut lines = vec![];
            lines.push(format!("Route:   {}", route));
            lines.push(format!("Entry:   {}", path));
            lines.push(format!("Section: {}", trail.join(" › ")));
            lines.join("\n")
        }
        None => format!("No menu entry points at {}", route),
    }
}

fn header(labels: &[&str], no_color: bool) -> Vec<Cell> {
    labels
        .iter()
        .map(|label| {
            let cell = Cell::new(label);
            // Apply colors only if enabled
            if no_color {
                cell
            } else {
                cell.fg(Color::Cyan)
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cartadmin_core::{opencart_admin, NavNode};

    fn small_menu() -> NavModel {
        NavModel::new(vec![
            NavNode::leaf("Dashboard", "/"),
            NavNode::branch(
                "Catalog",
                "/catalog",
                vec![
                    NavNode::leaf("Products", "/catalog/products"),
                    NavNode::leaf("Categories", "/catalog/categories"),
                ],
            ),
            NavNode::new("Placeholder"),
        ])
        .unwrap()
    }

    #[test]
    fn test_expansion_reveals_route() {
        let model = opencart_admin();
        let store = expansion_for(&model, &[], "/localisation/tax-rates", false).unwrap();

        assert!(store.is_expanded(&NavPath::from_indices(vec![7])));
        assert!(store.is_expanded(&NavPath::from_indices(vec![7, 2])));
        assert!(store.is_expanded(&NavPath::from_indices(vec![7, 2, 9])));
        assert_eq!(store.expanded_count(), 3);
    }

    #[test]
    fn test_expansion_rejects_bad_paths() {
        let model = small_menu();

        assert!(matches!(
            expansion_for(&model, &["x.1".to_string()], "/", false),
            Err(CliError::InvalidPath(_))
        ));
        assert!(matches!(
            expansion_for(&model, &["1.9".to_string()], "/", false),
            Err(CliError::UnknownPath { .. })
        ));
        let err = expansion_for(&model, &["0".to_string()], "/", false).unwrap_err();
        assert!(err.to_string().contains("Dashboard"));
    }

    #[test]
    fn test_expand_all() {
        let model = opencart_admin();
        let store = expansion_for(&model, &[], "/", true).unwrap();
        let branches = model.walk().filter(|(_, n)| n.is_branch()).count();
        assert_eq!(store.expanded_count(), branches);
    }

    #[test]
    fn test_menu_tree_table() {
        let model = small_menu();
        let store = expansion_for(&model, &["1".to_string()], "/catalog/products", false).unwrap();
        let output = format_menu_tree(&model, &store, "/catalog/products", false, true);

        assert!(output.contains("Catalog ▾"));
        assert!(output.contains("Products"));
        assert!(output.contains("1.0"));
        assert!(output.contains("active"));
        assert!(output.contains("inert"));
    }

    #[test]
    fn test_menu_tree_json() {
        let model = small_menu();
        let output = format_menu_tree(&model, &ExpansionStore::new(), "/", true, true);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["items"][1]["children"][0]["name"], "Products");
    }

    #[test]
    fn test_report_output() {
        let (_, report) = cartadmin_core::load_menu(None);
        let output = format_report(&report, true);
        assert!(output.contains("warning"));
        assert!(output.contains("Returns"));

        let mut clean = MenuReport::new();
        clean.nodes_scanned = 3;
        clean.max_depth_seen = 2;
        assert_eq!(
            format_report(&clean, true),
            "Menu OK (3 entries, 2 levels deep)"
        );
    }

    #[test]
    fn test_resolve_output() {
        let model = opencart_admin();
        let output = format_resolve(&model, "/catalog/products", false);
        assert!(output.contains("Entry:   1.1"));
        assert!(output.contains("Catalog › Products"));

        let json: serde_json::Value =
            serde_json::from_str(&format_resolve(&model, "/nowhere", true)).unwrap();
        assert!(json["active_path"].is_null());

        assert_eq!(
            format_resolve(&model, "/nowhere", false),
            "No menu entry points at /nowhere"
        );
    }
}
