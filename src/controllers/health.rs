use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::fatsecret::TokenManager;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Ready once a FatSecret token can be obtained (usually straight from the cache)
pub async fn health_ready(State(tokens): State<Arc<TokenManager>>) -> impl IntoResponse {
    match tokens.access_token().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "oauth": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check could not obtain a token");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "oauth": "unavailable"
                })),
            )
        }
    }
}
