//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the Leptos shell for every client route, serves the
//! compiled WASM/CSS bundle under `/pkg`, and answers `/healthz`. Content
//! documents are served by the separate content service; nothing here reads
//! or writes them.

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

use std::path::{Path, PathBuf};

use axum::Json;
use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, HostConfig};

/// Body of `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
}

/// Leptos SSR routes + static bundle + health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &HostConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portfolio::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let api_endpoint = config.api_endpoint.clone();
            move || portfolio::app::shell(opts.clone(), api_endpoint.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = site_root(config.site_root.as_deref(), leptos_options.site_root.as_ref());
    tracing::info!(site_root = %site_root.display(), "serving static bundle");

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// `SITE_ROOT` when configured, else the Leptos `site-root`.
fn site_root(configured: Option<&Path>, leptos_root: &str) -> PathBuf {
    configured.map_or_else(|| PathBuf::from(leptos_root), Path::to_path_buf)
}

async fn healthz() -> Json<Health> {
    Json(Health { status: "ok", service: env!("CARGO_PKG_NAME") })
}
