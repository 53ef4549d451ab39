//! Site creation routes.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use db::models::Client;
use db::models::site::{self, SiteStatus};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::sites::common::CreateSiteRequest;

/// POST /api/sites
///
/// Register a site for an existing client.
///
/// ### Responses
/// - `201 Created` with the stored site
/// - `400 Bad Request` (validation failure)
/// - `404 Not Found` (unknown client)
/// - `409 Conflict` (duplicate site code)
pub async fn create_site(
    State(db): State<DatabaseConnection>,
    Json(req): Json<CreateSiteRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<site::Model>::error(
                common::format_validation_errors(&validation_errors),
            )),
        );
    }

    match Client::find_by_id(req.client_id).one(&db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<site::Model>::error("Client not found")),
            );
        }
        Err(e) => return crate::routes::common::domain_error_response(e.into()),
    }

    let now = Utc::now();
    let result = site::ActiveModel {
        client_id: Set(req.client_id),
        site_name: Set(req.site_name),
        site_code: Set(req.site_code),
        address: Set(req.address),
        required_agents: Set(req.required_agents.unwrap_or(1)),
        site_status: Set(req.site_status.unwrap_or(SiteStatus::Active)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await;

    match result {
        Ok(site) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(site, "Site created successfully")),
        ),
        Err(e) => {
            if e.to_string()
                .contains("UNIQUE constraint failed: sites.site_code")
            {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<site::Model>::error(
                        "A site with this code already exists",
                    )),
                );
            }
            crate::routes::common::domain_error_response(e.into())
        }
    }
}
