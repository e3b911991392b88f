//! Health probe for orchestrators

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::db::PING_TIMEOUT;
use crate::http::server::AppState;

pub const HEALTH_PATH: &str = "/_internal/health";

/// GET /_internal/health - 200 if the database answers a ping, 502 otherwise
async fn health(State(state): State<AppState>) -> StatusCode {
    match state.store.ping(PING_TIMEOUT).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route(HEALTH_PATH, get(health))
}
