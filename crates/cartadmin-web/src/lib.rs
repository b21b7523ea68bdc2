//! cartadmin-web - Web frontend for cartadmin using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::{create_router, AppState};

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use crate::router::{create_router, AppState};
    use anyhow::Result;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing::info;

    /// Run the web server
    pub async fn run(state: AppState, port: u16) -> Result<()> {
        let router = create_router(state);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr).await?;

        info!("Web server listening on http://{}", addr);
        println!("Web server listening on http://{}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}
