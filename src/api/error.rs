use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use super::types::{ErrorResponse, MessageResponse};
use crate::geo::GeoPointError;
use crate::lookup::LookupError;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("store error")]
    Store(#[from] anyhow::Error),
}

impl From<LookupError> for ApiError {
    fn from(value: LookupError) -> Self {
        match value {
            e @ LookupError::NoBusStops => ApiError::NotFound(e.to_string()),
            LookupError::Store(e) => ApiError::Store(e),
        }
    }
}

impl From<GeoPointError> for ApiError {
    fn from(value: GeoPointError) -> Self {
        ApiError::Validation(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            }
            ApiError::NotFound(error) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error })).into_response()
            }
            ApiError::Conflict(message) => {
                (StatusCode::CONFLICT, Json(MessageResponse { message })).into_response()
            }
            ApiError::Store(e) => {
                error!("{e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal Server Error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
