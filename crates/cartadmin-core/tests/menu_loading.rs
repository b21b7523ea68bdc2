//! Integration tests for menu files
//!
//! Run with:
//! ```bash
//! cargo test --test menu_loading
//! ```

use cartadmin_core::{load_menu, CoreError, ErrorSeverity, Icon, NavModel, NavPath};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const YAML_MENU: &str = r#"
items:
  - name: Dashboard
    href: /
    icon: dashboard
  - name: Catalog
    href: /catalog
    icon: catalog
    children:
      - { name: Products, href: /catalog/products }
      - { name: Categories, href: /catalog/categories }
"#;

#[test]
fn test_yaml_menu_loads() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "menu.yaml", YAML_MENU);

    let model = NavModel::load(&path).unwrap();
    assert_eq!(model.roots().len(), 2);
    assert_eq!(model.roots()[0].icon, Some(Icon::Dashboard));
    assert_eq!(
        model.find_by_href("/catalog/categories"),
        Some(NavPath::from_indices(vec![1, 1]))
    );
}

#[test]
fn test_json_and_yaml_describe_the_same_tree() {
    let dir = TempDir::new().unwrap();
    let yaml = NavModel::load(&write(&dir, "menu.yml", YAML_MENU)).unwrap();

    let json = serde_json::to_string(&yaml.to_document()).unwrap();
    let from_json = NavModel::load(&write(&dir, "menu.json", &json)).unwrap();

    assert_eq!(yaml, from_json);
}

#[test]
fn test_too_deep_menu_is_rejected() {
    let dir = TempDir::new().unwrap();
    let json = r#"{"items":[{"name":"L0","children":[{"name":"L1","children":[
        {"name":"L2","children":[{"name":"L3","children":[{"name":"L4","children":[
        {"name":"L5","children":[{"name":"L6","href":"/deep"}]}]}]}]}]}]}]}"#;
    let path = write(&dir, "deep.json", json);

    match NavModel::load(&path) {
        Err(CoreError::MenuTooDeep { name, path, .. }) => {
            assert_eq!(name, "L6");
            assert_eq!(path, "0.0.0.0.0.0.0");
        }
        other => panic!("expected MenuTooDeep, got {other:?}"),
    }
}

#[test]
fn test_deepest_allowed_menu_loads() {
    let dir = TempDir::new().unwrap();
    let json = r#"{"items":[{"name":"L0","children":[{"name":"L1","children":[
        {"name":"L2","children":[{"name":"L3","children":[{"name":"L4","children":[
        {"name":"L5","href":"/deep"}]}]}]}]}]}]}"#;
    let path = write(&dir, "deep.json", json);

    let model = NavModel::load(&path).unwrap();
    assert_eq!(model.validate().max_depth_seen, 6);
}

#[test]
fn test_unsupported_and_missing_files() {
    let dir = TempDir::new().unwrap();
    let toml = write(&dir, "menu.toml", "items = []");

    assert!(matches!(
        NavModel::load(&toml),
        Err(CoreError::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        NavModel::load(&dir.path().join("absent.json")),
        Err(CoreError::FileNotFound { .. })
    ));
}

#[test]
fn test_parse_errors_carry_the_path() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.json", "{ \"items\": [ {\"href\": \"/\"} ] }");

    let err = NavModel::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::JsonParse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_malformed_and_duplicate_entries_are_warnings() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "menu.yaml",
        r#"
items:
  - name: Sales
    href: /sales
    children:
      - { name: Returns, href: /sales/returns }
  - name: System
    href: /system
    children:
      - { name: Returns, href: /system/returns }
      - name: Placeholder
        icon: system
"#,
    );

    let (model, report) = load_menu(Some(&path));
    assert_eq!(model.roots().len(), 2);
    assert!(!report.has_fatal_errors());

    assert_eq!(report.issue_count(), (3, 0));
    assert_eq!(report.warning_count(), 3);
    assert!(report.issues.iter().all(|i| i.severity == ErrorSeverity::Warning));

    let inert = report
        .issues
        .iter()
        .find(|i| i.source == "1.1" && i.suggestion.is_some())
        .unwrap();
    assert!(inert.message.contains("Placeholder"));

    let duplicate = report
        .issues
        .iter()
        .find(|i| i.message.contains("Returns"))
        .unwrap();
    assert_eq!(duplicate.source, "0.0, 1.0");
}

#[test]
fn test_broken_file_falls_back_to_builtin_menu() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "menu.yaml", "items: [ this is not: valid");

    let (model, report) = load_menu(Some(&path));
    assert!(report.has_fatal_errors());
    assert_eq!(model, cartadmin_core::opencart_admin());
}
