//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos app is rendered server-side at `/`. Compiled WASM, JS and CSS
//! live under `/pkg` in the Leptos site root. Anything else falls through to
//! the public directory (favicon, robots, images) and, failing that, to the
//! Leptos error handler, which renders the app's not-found route.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Full application router: Leptos SSR plus the asset routes. Paths that
/// match neither a Leptos route nor a public file render the app's 404 page.
pub fn app(leptos_options: LeptosOptions, config: &ServerConfig) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let not_found = Router::new()
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    leptos_router.merge(asset_routes(&site_root, config, not_found))
}

/// Health probe, `/pkg` and the public directory, with request tracing and
/// gzip applied. Misses in the public directory go to `not_found`.
fn asset_routes(site_root: &Path, config: &ServerConfig, not_found: Router) -> Router {
    let public = ServeDir::new(&config.public_dir)
        .append_index_html_on_directories(true)
        .not_found_service(not_found);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(public)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
