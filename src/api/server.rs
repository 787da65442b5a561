// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::handlers::{
    convert_handler, convert_method_not_allowed, index_handler, shared_registry,
    unit_info_handler, units_by_dimension_handler, SharedRegistry,
};
use crate::cli::ServeArgs;
use crate::common::config::AppConfig;

/// Build the service router over a shared registry.
///
/// Split out from [`run_serve_mode`] so tests can drive the router
/// in-process without binding a socket.
pub fn router(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(
            "/convert",
            post(convert_handler).fallback(convert_method_not_allowed),
        )
        .route("/unit-info", get(unit_info_handler))
        .route("/units-by-dimension", get(units_by_dimension_handler))
        .nest_service("/static", ServeDir::new(AppConfig::STATIC_DIR))
        .with_state(registry)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Run the converter web service.
pub async fn run_serve_mode(args: &ServeArgs) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "all_units=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let registry = shared_registry();
    tracing::info!(
        "Registry ready: {} units across {} dimensions",
        registry.len(),
        registry.all_dimensions().len()
    );

    let app = router(registry);
    run_tcp_listener(app, args.port).await;
}

/// Bind the TCP listener and serve until shutdown.
async fn run_tcp_listener(app: Router, port: u16) {
    let listener = match TcpListener::bind(&format!("0.0.0.0:{port}")).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind TCP listener on port {port}: {e}");
            eprintln!("Error: Failed to bind TCP listener on port {port}: {e}");
            return;
        }
    };
    tracing::info!("Server started on http://localhost:{port}");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("TCP server error: {e}");
    }
}
