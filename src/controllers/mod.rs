pub mod food;
pub mod health;
pub mod recipe;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::{AppError, AppResult};
use crate::infrastructure::fatsecret::UpstreamResponse;

/// Hand the upstream status and body back to the caller as-is
pub(crate) fn relay(upstream: UpstreamResponse) -> AppResult<Response> {
    let status = StatusCode::from_u16(upstream.status).map_err(|e| {
        AppError::Internal(format!("invalid upstream status {}: {}", upstream.status, e))
    })?;

    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from(upstream.body),
    )
        .into_response())
}
