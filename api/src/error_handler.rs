use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use es_client::{EsError, QueryError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::core::app_state::ConfigError;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- IO / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request validation ---
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("not found")]
    NotFound,

    /// Engine failure whose status code is worth passing through.
    #[error("backend error")]
    Backend { status: StatusCode },

    /// Anything else on the engine path; detail is logged, never echoed.
    #[error("internal server error")]
    Internal,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // startup-only
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,

            // 4xx
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound => StatusCode::NOT_FOUND,

            // mapped from the engine
            AppError::Backend { status } => *status,

            // 5xx
            AppError::Bind(_) | AppError::Server(_) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Unprocessable(_) => "UNPROCESSABLE",
            AppError::NotFound => "NOT_FOUND",
            AppError::Backend { .. } => "BACKEND_ERROR",
            AppError::Internal => "INTERNAL",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Unparseable request URLs map to plain 400s.
impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(err: axum::extract::rejection::QueryRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Compile-time query rejections are validation failures, not engine ones.
impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        AppError::Unprocessable(err.to_string())
    }
}

/// Map engine errors to responses: not-found and upstream statuses pass
/// through, everything else collapses to a logged 500.
impl From<EsError> for AppError {
    fn from(err: EsError) -> Self {
        match err {
            EsError::NotFound { .. } => AppError::NotFound,
            EsError::Upstream { status, reason } => {
                error!(status, %reason, "engine returned an error status");
                let status = StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                AppError::Backend { status }
            }
            other => {
                error!(error = %other, "engine request failed");
                AppError::Internal
            }
        }
    }
}
