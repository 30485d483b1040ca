//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only renders and hydrates the Leptos app. Every `/auth/*` call
//! the app makes goes straight from the browser to the account API configured
//! at client build time, so no API routes live here.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::config::errors::LeptosConfigError;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use thiserror::Error;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use voicelist_client::app::{App, shell};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(#[from] LeptosConfigError),
}

/// Routes that never touch Leptos; probed by load balancers.
fn probe_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR for `/`, `/login`, `/signup`, `/dashboard` plus the `/pkg`
/// bundle (WASM, JS, CSS).
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app() -> Result<Router, AppError> {
    let leptos_options = load_options(None)?;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(probe_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Leptos options from `path`, or from the workspace `Cargo.toml` and the
/// `LEPTOS_*` variables cargo-leptos sets when `path` is `None`.
fn load_options(path: Option<&str>) -> Result<LeptosOptions, AppError> {
    Ok(get_configuration(path)?.leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
