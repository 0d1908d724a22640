use crate::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseStatus {
    Ready,
    NotConfigured,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
    pub database: DatabaseStatus,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/ping", get(ping))
}

#[utoipa::path(
    get,
    path = "/api/ping",
    tag = "testing",
    responses(
        (status = 200, description = "Server is up", body = PingResponse)
    )
)]
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    let database = if state.store().is_some() {
        DatabaseStatus::Ready
    } else {
        DatabaseStatus::NotConfigured
    };

    Json(PingResponse {
        message: "pong".to_string(),
        database,
    })
}

#[derive(OpenApi)]
#[openapi(paths(ping), components(schemas(PingResponse, DatabaseStatus)))]
pub struct ApiDoc;
