//! Web router using Axum

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use cartadmin_core::{active_path, trail_for_route, Breakpoint, NavModel};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::api::{NavigationPayload, ResolvePayload};

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<NavModel>,
    pub breakpoint: Breakpoint,
    /// Validation warnings found when the menu was loaded
    pub warnings: usize,
}

impl AppState {
    pub fn new(model: Arc<NavModel>, breakpoint: Breakpoint, warnings: usize) -> Self {
        Self {
            model,
            breakpoint,
            warnings,
        }
    }
}

/// Create the web router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/navigation", get(navigation_handler))
        .route("/api/navigation/resolve", get(resolve_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

async fn index_handler() -> Html<&'static str> {
    Html(SETUP_PAGE)
}

async fn navigation_handler(State(state): State<AppState>) -> Json<NavigationPayload> {
    Json(NavigationPayload::new(
        &state.model,
        state.breakpoint,
        state.warnings,
    ))
}

#[derive(Debug, Deserialize)]
struct ResolveQuery {
    route: Option<String>,
}

async fn resolve_handler(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolvePayload>, (StatusCode, Json<serde_json::Value>)> {
    let Some(route) = query.route else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "missing 'route' query parameter" })),
        ));
    };

    let active = active_path(&state.model, &route);
    debug!(route = %route, active = ?active, "Resolved route");

    Ok(Json(ResolvePayload {
        trail: trail_for_route(&state.model, &route),
        active_path: active.map(|path| path.to_string()),
        route,
    }))
}

async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "nodes": state.model.node_count(),
    }))
}

const SETUP_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>cartadmin - OpenCart administration</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        h1 { font-size: 2rem; margin-bottom: 1rem; color: #1a1a1a; }
        p { margin-bottom: 1rem; color: #333; line-height: 1.6; }
        code {
            background: #f0f0f0;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            font-family: monospace;
        }
        .step {
            margin: 1.5rem 0;
            padding: 1rem;
            background: #f8f8f8;
            border-left: 3px solid #333;
        }
        .api-links { margin-top: 2rem; padding-top: 1.5rem; border-top: 1px solid #ddd; }
        a { color: #0066cc; text-decoration: none; }
        a:hover { text-decoration: underline; }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>cartadmin Web UI - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the admin sidebar can be displayed.</p>

        <div class="step">
            <strong>Setup Instructions:</strong>
            <ol style="margin-left: 1.5rem; margin-top: 0.5rem;">
                <li>Install Trunk: <code>cargo install trunk</code></li>
                <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
                <li>Build frontend: <code>cd crates/cartadmin-web && trunk build --release --features csr</code></li>
                <li>Restart server: <code>cargo run -- web --port 3333</code></li>
            </ol>
        </div>

        <div class="api-links">
            <p><strong>API Endpoints (available now):</strong></p>
            <ul style="margin-left: 1.5rem;">
                <li><a href="/api/health">/api/health</a> - Health check</li>
                <li><a href="/api/navigation">/api/navigation</a> - Menu tree JSON</li>
                <li><a href="/api/navigation/resolve?route=/catalog/products">/api/navigation/resolve?route=</a> - Active entry for a route</li>
            </ul>
        </div>
    </div>
</body>
</html>"#;
