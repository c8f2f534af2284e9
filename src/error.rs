//! # Centralized Error Handling
//!
//! This module provides a unified error handling system for the application.
//! Handlers express expected failures as [`AppError`] variants; the single
//! [`IntoResponse`] implementation below is the process-wide boundary that
//! converts every variant into a JSON error response exactly once.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Central application error type that encompasses all possible error
/// conditions.
///
/// The first three variants are raised by handlers for expected
/// conditions and carry the client-facing detail string. _Everything
/// else funnels into [`AppError::Internal`], whose cause is logged and
/// echoed back in the 500 body._
#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(&'static str),

    #[error("not found: {0}")]
    NotFound(&'static str),

    #[error("service unavailable: {0}")]
    ServiceUnavailable(&'static str),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: &'static str,
}

#[derive(Serialize)]
struct InternalErrorBody {
    detail: &'static str,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::Internal(cause) => {
                // Boundary-side logging for failures no handler mapped
                error!(error = %cause, "Unhandled error reached the global boundary");

                let body = Json(InternalErrorBody {
                    detail: "Internal server error",
                    error: cause,
                });
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
