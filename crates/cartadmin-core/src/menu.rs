//! Menu sources: the built-in OpenCart admin menu and menu files
//!
//! A menu file is a JSON or YAML document with a top-level `items` list:
//!
//! ```yaml
//! items:
//!   - name: Dashboard
//!     href: /
//!     icon: dashboard
//!   - name: Catalog
//!     href: /catalog
//!     icon: catalog
//!     children:
//!       - { name: Products, href: /catalog/products }
//! ```

use crate::error::{CoreError, MenuIssue, MenuReport};
use crate::nav::{Icon, NavModel, NavNode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// On-disk representation of a menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDocument {
    pub items: Vec<NavNode>,
}

impl NavModel {
    pub fn from_json_str(content: &str, origin: &Path) -> Result<Self, CoreError> {
        let doc: MenuDocument =
            serde_json::from_str(content).map_err(|source| CoreError::JsonParse {
                path: origin.to_path_buf(),
                message: source.to_string(),
                source,
            })?;
        NavModel::new(doc.items)
    }

    pub fn from_yaml_str(content: &str, origin: &Path) -> Result<Self, CoreError> {
        let doc: MenuDocument =
            serde_yaml::from_str(content).map_err(|source| CoreError::YamlParse {
                path: origin.to_path_buf(),
                message: source.to_string(),
                source,
            })?;
        NavModel::new(doc.items)
    }

    /// Load a menu file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Err(CoreError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let model = match extension.as_deref() {
            Some("json") => Self::from_json_str(&content, path)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content, path)?,
            _ => {
                return Err(CoreError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        debug!(path = %path.display(), nodes = model.node_count(), "Menu file loaded");
        Ok(model)
    }

    pub fn to_document(&self) -> MenuDocument {
        MenuDocument {
            items: self.roots().to_vec(),
        }
    }
}

/// Resolve the menu to use and validate it
///
/// Falls back to the built-in menu when no file is given. A file that fails
/// to load is a fatal issue in the returned report; the caller decides
/// whether to continue with the built-in menu.
pub fn load_menu(path: Option<&Path>) -> (NavModel, MenuReport) {
    let mut report = MenuReport::new();

    let model = match path {
        None => opencart_admin(),
        Some(path) => match NavModel::load(path) {
            Ok(model) => {
                info!(path = %path.display(), "Using menu file");
                model
            }
            Err(e) => {
                report.add_issue(MenuIssue::from_core_error(path.display().to_string(), &e));
                opencart_admin()
            }
        },
    };

    report.merge(model.validate());
    (model, report)
}

/// The OpenCart 4 administration menu
pub fn opencart_admin() -> NavModel {
    let items = vec![
        NavNode::leaf("Dashboard", "/").with_icon(Icon::Dashboard),
        NavNode::branch(
            "Catalog",
            "/catalog",
            vec![
                NavNode::leaf("Categories", "/catalog/categories"),
                NavNode::leaf("Products", "/catalog/products"),
                NavNode::leaf("Subscription Plans", "/catalog/subscription-plans"),
                NavNode::leaf("Filters", "/catalog/filters"),
                NavNode::branch(
                    "Attributes",
                    "/catalog/attribute-menu",
                    vec![
                        NavNode::leaf("Attributes", "/catalog/attributes"),
                        NavNode::leaf("Attribute Groups", "/catalog/attribute-groups"),
                    ],
                ),
                NavNode::leaf("Options", "/catalog/options"),
                NavNode::leaf("Manufacturers", "/catalog/manufacturers"),
                NavNode::leaf("Downloads", "/catalog/downloads"),
                NavNode::leaf("Reviews", "/catalog/reviews"),
                NavNode::leaf("Information", "/catalog/information"),
            ],
        )
        .with_icon(Icon::Catalog),
        NavNode::branch(
            "Extensions",
            "/extensions",
            vec![
                NavNode::leaf("Marketplace", "/extensions/marketplace"),
                NavNode::leaf("Installer", "/extensions/installer"),
                NavNode::leaf("Extensions", "/extensions/extensions"),
                NavNode::leaf("Startup", "/extensions/startup"),
                NavNode::leaf("Events", "/extensions/events"),
                NavNode::leaf("Cron Jobs", "/extensions/cron"),
            ],
        )
        .with_icon(Icon::Extensions),
        NavNode::branch(
            "Design",
            "/design",
            vec![
                NavNode::leaf("Layouts", "/design/layouts"),
                NavNode::leaf("Theme Editor", "/design/theme"),
                NavNode::leaf("Language Editor", "/design/translation"),
                NavNode::leaf("Banners", "/design/banners"),
                NavNode::leaf("SEO URL", "/design/seo-url"),
            ],
        )
        .with_icon(Icon::Design),
        NavNode::branch(
            "Sales",
            "/sales",
            vec![
                NavNode::leaf("Orders", "/sales/orders"),
                NavNode::leaf("Subscriptions", "/sales/subscriptions"),
                NavNode::leaf("Returns", "/sales/returns"),
                NavNode::branch(
                    "Gift Vouchers",
                    "/sales/voucher-menu",
                    vec![
                        NavNode::leaf("Gift Vouchers", "/sales/vouchers"),
                        NavNode::leaf("Voucher Themes", "/sales/voucher-themes"),
                    ],
                ),
            ],
        )
        .with_icon(Icon::Sales),
        NavNode::branch(
            "Customers",
            "/customers",
            vec![
                NavNode::leaf("Customers", "/customers/customers"),
                NavNode::leaf("Customer Groups", "/customers/groups"),
                NavNode::leaf("Customer Approvals", "/customers/approvals"),
                NavNode::leaf("GDPR", "/customers/gdpr"),
                NavNode::leaf("Custom Fields", "/customers/custom-fields"),
            ],
        )
        .with_icon(Icon::Customers),
        NavNode::branch(
            "Marketing",
            "/marketing",
            vec![
                NavNode::leaf("Affiliates", "/marketing/affiliates"),
                NavNode::leaf("Marketing", "/marketing/campaigns"),
                NavNode::leaf("Coupons", "/marketing/coupons"),
                NavNode::leaf("Mail", "/marketing/mail"),
            ],
        )
        .with_icon(Icon::Marketing),
        NavNode::branch(
            "System",
            "/system",
            vec![
                NavNode::leaf("Settings", "/system/settings"),
                NavNode::branch(
                    "Users",
                    "/system/user-menu",
                    vec![
                        NavNode::leaf("Users", "/system/users"),
                        NavNode::leaf("User Groups", "/system/user-groups"),
                        NavNode::leaf("API", "/system/api"),
                    ],
                ),
                NavNode::branch(
                    "Localisation",
                    "/system/localisation",
                    vec![
                        NavNode::leaf("Store Location", "/localisation/locations"),
                        NavNode::leaf("Languages", "/localisation/languages"),
                        NavNode::leaf("Currencies", "/localisation/currencies"),
                        NavNode::leaf("Stock Statuses", "/localisation/stock-statuses"),
                        NavNode::leaf("Order Statuses", "/localisation/order-statuses"),
                        NavNode::branch(
                            "Returns",
                            "/localisation/returns",
                            vec![
                                NavNode::leaf("Return Statuses", "/localisation/return-statuses"),
                                NavNode::leaf("Return Actions", "/localisation/return-actions"),
                                NavNode::leaf("Return Reasons", "/localisation/return-reasons"),
                            ],
                        ),
                        NavNode::leaf("Countries", "/localisation/countries"),
                        NavNode::leaf("Zones", "/localisation/zones"),
                        NavNode::leaf("Geo Zones", "/localisation/geo-zones"),
                        NavNode::branch(
                            "Taxes",
                            "/localisation/taxes",
                            vec![
                                NavNode::leaf("Tax Classes", "/localisation/tax-classes"),
                                NavNode::leaf("Tax Rates", "/localisation/tax-rates"),
                            ],
                        ),
                        NavNode::leaf("Length Classes", "/localisation/length-classes"),
                        NavNode::leaf("Weight Classes", "/localisation/weight-classes"),
                    ],
                ),
                NavNode::branch(
                    "Maintenance",
                    "/system/maintenance",
                    vec![
                        NavNode::leaf("Backup / Restore", "/maintenance/backup"),
                        NavNode::leaf("Uploads", "/maintenance/uploads"),
                        NavNode::leaf("Error Logs", "/maintenance/error-logs"),
                    ],
                ),
            ],
        )
        .with_icon(Icon::System),
        NavNode::branch(
            "Reports",
            "/reports",
            vec![
                NavNode::leaf("Reports", "/reports/reports"),
                NavNode::leaf("Who's Online", "/reports/online"),
                NavNode::leaf("Statistics", "/reports/statistics"),
            ],
        )
        .with_icon(Icon::Reports),
    ];

    // Four levels deep, well within MAX_MENU_DEPTH
    NavModel::from_static(items)
}
