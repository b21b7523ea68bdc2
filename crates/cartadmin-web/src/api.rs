//! JSON payloads shared by the Axum API and the WASM client

use cartadmin_core::{opencart_admin, Breakpoint, MenuDocument, NavModel, NavNode};
use leptos::logging;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// `GET /api/navigation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationPayload {
    pub items: Vec<NavNode>,
    pub breakpoint_px: Breakpoint,
    #[serde(default)]
    pub warnings: usize,
}

impl NavigationPayload {
    pub fn new(model: &NavModel, breakpoint_px: Breakpoint, warnings: usize) -> Self {
        let MenuDocument { items } = model.to_document();
        Self {
            items,
            breakpoint_px,
            warnings,
        }
    }

    /// Validate the received tree (depth bound) into a model
    pub fn into_model(self) -> Result<NavModel, String> {
        NavModel::new(self.items).map_err(|e| e.to_string())
    }
}

/// `GET /api/navigation/resolve?route=`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvePayload {
    pub route: String,
    pub active_path: Option<String>,
    pub trail: Vec<String>,
}

/// Menu and breakpoint the client renders with
#[derive(Debug, Clone, PartialEq)]
pub struct ServedMenu {
    pub model: Arc<NavModel>,
    pub breakpoint: Breakpoint,
}

impl ServedMenu {
    pub fn builtin() -> Self {
        Self {
            model: Arc::new(opencart_admin()),
            breakpoint: Breakpoint::WEB,
        }
    }

    /// Use the served menu, or the built-in one if it cannot be used
    pub fn from_response(response: Result<NavigationPayload, String>) -> Self {
        let served = response.and_then(|payload| {
            let breakpoint = payload.breakpoint_px;
            payload.into_model().map(|model| Self {
                model: Arc::new(model),
                breakpoint,
            })
        });

        served.unwrap_or_else(|e| {
            logging::warn!("Using built-in menu: {}", e);
            Self::builtin()
        })
    }
}

/// Fetch the menu served by the backend
pub async fn fetch_navigation() -> Result<NavigationPayload, String> {
    let response = gloo_net::http::Request::get("/api/navigation")
        .send()
        .await
        .map_err(|e| format!("Failed to fetch navigation: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartadmin_core::opencart_admin;

    #[test]
    fn test_payload_shape() {
        let payload = NavigationPayload::new(&opencart_admin(), Breakpoint::WEB, 2);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["breakpoint_px"], 1024);
        assert_eq!(json["warnings"], 2);
        assert_eq!(json["items"][0]["name"], "Dashboard");
        assert_eq!(json["items"][0]["icon"], "dashboard");
        assert!(json["items"][0].get("children").is_none());
    }

    #[test]
    fn test_into_model_enforces_depth() {
        let mut node = NavNode::leaf("Leaf", "/deep");
        for level in 0..7 {
            node = NavNode::branch(format!("L{level}"), format!("/l{level}"), vec![node]);
        }
        let payload = NavigationPayload {
            items: vec![node],
            breakpoint_px: Breakpoint::WEB,
            warnings: 0,
        };
        assert!(payload.into_model().is_err());
    }

    #[test]
    fn test_served_menu_uses_payload() {
        let model = NavModel::new(vec![NavNode::leaf("Home", "/")]).unwrap();
        let payload = NavigationPayload::new(&model, Breakpoint(768), 0);

        let served = ServedMenu::from_response(Ok(payload));
        assert_eq!(*served.model, model);
        assert_eq!(served.breakpoint, Breakpoint(768));
    }

    #[test]
    fn test_served_menu_falls_back_on_error() {
        let served = ServedMenu::from_response(Err("HTTP error: 502".to_string()));
        assert_eq!(served, ServedMenu::builtin());
        assert_eq!(served.breakpoint, Breakpoint::WEB);
    }
}
