//! Client removal routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::Client;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait};

use crate::response::{ApiResponse, Empty};

/// DELETE /api/clients/{client_id}
///
/// Remove a client. Its sites (and their attendance history) are removed
/// with it via cascading foreign keys.
pub async fn delete_client(
    State(db): State<DatabaseConnection>,
    Path(client_id): Path<i64>,
) -> impl IntoResponse {
    let client = match Client::find_by_id(client_id).one(&db).await {
        Ok(Some(client)) => client,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Client not found")),
            );
        }
        Err(e) => return crate::routes::common::domain_error_response(e.into()),
    };

    match client.delete(&db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Client deleted successfully")),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
