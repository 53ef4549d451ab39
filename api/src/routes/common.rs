//! Domain-error-to-HTTP translation every handler goes through.

use crate::response::ApiResponse;
use axum::{Json, http::StatusCode};
use serde::Serialize;
use services::DomainError;

/// Maps a domain error onto the HTTP status it answers with.
///
/// - Validation / invalid time range → `400`
/// - Missing resource → `404`
/// - Lifecycle violations (terminal state reached, duplicate pending
///   correction) → `409`
/// - Database failure → `500`, logged here with the real error; the client
///   only sees a generic message.
pub fn domain_error_response<T: Serialize>(
    err: DomainError,
) -> (StatusCode, Json<ApiResponse<T>>) {
    let status = match &err {
        DomainError::Validation(_) | DomainError::InvalidTimeRange => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::InvalidState(_) | DomainError::DuplicatePendingCorrection => {
            StatusCode::CONFLICT
        }
        DomainError::Db(e) => {
            tracing::error!(error = %e, "database error while handling request");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Database error")),
            );
        }
    };

    (status, Json(ApiResponse::error(err.to_string())))
}
