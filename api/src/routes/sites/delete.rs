//! Site removal routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::Site;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait};

use crate::response::{ApiResponse, Empty};

/// DELETE /api/sites/{site_id}
///
/// Remove a site together with its attendance history.
pub async fn delete_site(
    State(db): State<DatabaseConnection>,
    Path(site_id): Path<i64>,
) -> impl IntoResponse {
    let site = match Site::find_by_id(site_id).one(&db).await {
        Ok(Some(site)) => site,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Site not found")),
            );
        }
        Err(e) => return crate::routes::common::domain_error_response(e.into()),
    };

    match site.delete(&db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Site deleted successfully")),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
