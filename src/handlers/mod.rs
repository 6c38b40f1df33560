use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::services::AppState;

/// Process-wide error taxonomy. Every error response carries the same JSON
/// shape with a fixed message per status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request error")]
    BadRequest,
    #[error("Resource not found")]
    NotFound,
    #[error("Unprocessable entity")]
    UnprocessableEntity,
    #[error("An error has occured, please try again")]
    Internal,
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Storage failure: {:?}", err);
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let json_response = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        });
        (status, Json(json_response)).into_response()
    }
}

/// Unknown routes get the same 404 shape as empty result sets.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.db)
        .await
    {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "service": "trivia-api",
                "version": env!("CARGO_PKG_VERSION"),
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "service": "trivia-api",
                    "error": e.to_string(),
                })),
            )
        }
    }
}

pub mod categories;
pub mod questions;
pub mod quizzes;
