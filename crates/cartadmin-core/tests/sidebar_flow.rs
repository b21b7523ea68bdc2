//! End-to-end sidebar behaviour on the built-in OpenCart menu

use cartadmin_core::{
    opencart_admin, trail_for_route, Breakpoint, ClickOutcome, IndentTier, Marker, NavController,
    NavPath, RowKind, SidebarHost, SidebarState,
};
use std::sync::Arc;

#[derive(Default)]
struct Host {
    route: String,
    open: bool,
    closes: usize,
}

impl SidebarHost for Host {
    fn navigate(&mut self, href: &str) {
        self.route = href.to_string();
    }

    fn close(&mut self) {
        self.open = false;
        self.closes += 1;
    }
}

fn controller(width: u32, open: bool) -> NavController {
    NavController::new(Arc::new(opencart_admin()), Breakpoint::TERMINAL, width, open)
}

#[test]
fn test_collapsed_menu_shows_only_roots() {
    let ctrl = controller(160, false);
    let rows = ctrl.rows("/");

    assert_eq!(rows.len(), 9);
    assert!(rows.iter().all(|r| r.level == 0 && r.indent == IndentTier::Root));
    assert!(matches!(rows[0].marker, Marker::Icon(_)));
    assert_eq!(rows[0].kind, RowKind::Leaf);
    assert!(rows[0].active);
    assert!(rows[1..].iter().all(|r| !r.active));
}

#[test]
fn test_drilling_into_localisation_taxes() {
    let mut ctrl = controller(160, false);
    let mut host = Host::default();

    for path in [
        NavPath::root(7),
        NavPath::from_indices(vec![7, 2]),
        NavPath::from_indices(vec![7, 2, 9]),
    ] {
        assert!(matches!(
            ctrl.click(&path, &mut host),
            ClickOutcome::Toggled { expanded: true, .. }
        ));
    }

    let tax_rates = NavPath::from_indices(vec![7, 2, 9, 1]);
    ctrl.click(&tax_rates, &mut host);
    assert_eq!(host.route, "/localisation/tax-rates");

    let rows = ctrl.rows(&host.route);
    let active: Vec<_> = rows.iter().filter(|r| r.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].path, tax_rates);
    assert_eq!(active[0].indent, IndentTier::Third);
    assert_eq!(active[0].marker, Marker::Bullet);

    let parent = active[0].parent.map(|i| &rows[i]).unwrap();
    assert_eq!(parent.label(), "Taxes");
    assert!(!parent.active);

    assert_eq!(
        trail_for_route(ctrl.model(), &host.route),
        vec!["System", "Localisation", "Taxes", "Tax Rates"]
    );
}

#[test]
fn test_shared_labels_keep_separate_state() {
    let mut ctrl = controller(160, false);
    ctrl.toggle(&NavPath::root(7));
    ctrl.toggle(&NavPath::from_indices(vec![7, 2]));
    ctrl.toggle(&NavPath::from_indices(vec![7, 2, 5]));

    let rows = ctrl.rows("/");
    let returns: Vec<_> = rows.iter().filter(|r| r.label() == "Returns").collect();
    assert_eq!(returns.len(), 1);
    assert_eq!(returns[0].kind, RowKind::Branch { expanded: true });
    assert!(!ctrl.is_expanded(&NavPath::from_indices(vec![4, 2])));
}

#[test]
fn test_mobile_session() {
    let mut ctrl = controller(60, false);
    let mut host = Host::default();
    assert_eq!(ctrl.state(), SidebarState::MobileClosed);

    // Hamburger
    host.open = true;
    ctrl.set_open(host.open);
    assert_eq!(ctrl.state(), SidebarState::MobileOpen);

    // Tap inside the sidebar on a branch: stays open
    assert!(!ctrl.pointer_down(true, &mut host));
    ctrl.click(&NavPath::root(1), &mut host);
    assert!(host.open);

    // Tap a leaf: navigates and closes
    let outcome = ctrl.click(&NavPath::from_indices(vec![1, 1]), &mut host);
    assert_eq!(
        outcome,
        ClickOutcome::Navigated {
            href: "/catalog/products".to_string(),
            closed: true
        }
    );
    assert!(!host.open);
    assert_eq!(ctrl.state(), SidebarState::MobileClosed);

    // Reopen, tap the backdrop
    host.open = true;
    ctrl.set_open(host.open);
    assert!(ctrl.pointer_down(false, &mut host));
    assert_eq!(ctrl.state(), SidebarState::MobileClosed);
    assert!(!ctrl.pointer_down(false, &mut host));
    assert_eq!(host.closes, 2);

    // Expansion survives the open/close cycle
    assert!(ctrl.is_expanded(&NavPath::root(1)));
}
