//! A single-page recipe board: list recipes, post new ones, edit or delete
//! them. HTML is rendered on the server; `/api/recipes` offers the same list
//! as JSON.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod pages;
pub mod schema;
pub mod seed;
pub mod store;
pub mod telemetry;

use axum::routing::get;
use axum::{Json, Router};
use config::Config;
use std::sync::Arc;
use store::RecipeStore;
use tower_http::trace::TraceLayer;

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
    /// `None` when no database is configured.
    store: Option<Arc<dyn RecipeStore>>,
}

impl AppState {
    pub fn new(config: Config, store: Option<Arc<dyn RecipeStore>>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    pub fn store(&self) -> Option<&dyn RecipeStore> {
        self.store.as_deref()
    }
}

/// Build the full router with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api::recipes::router())
        .merge(api::ping::router())
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(api::openapi()) }),
        )
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(telemetry::make_span)
                .on_request(())
                .on_response(telemetry::on_response)
                .on_failure(telemetry::on_failure),
        )
}
