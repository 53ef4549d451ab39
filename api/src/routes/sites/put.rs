//! Site editing routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use db::models::Site;
use db::models::site;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::sites::common::UpdateSiteRequest;

/// PUT /api/sites/{site_id}
///
/// Edit site details. The owning client cannot be changed; delete and
/// recreate the site instead.
pub async fn edit_site(
    State(db): State<DatabaseConnection>,
    Path(site_id): Path<i64>,
    Json(req): Json<UpdateSiteRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<site::Model>::error(
                common::format_validation_errors(&validation_errors),
            )),
        );
    }

    let site = match Site::find_by_id(site_id).one(&db).await {
        Ok(Some(site)) => site,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<site::Model>::error("Site not found")),
            );
        }
        Err(e) => return crate::routes::common::domain_error_response(e.into()),
    };

    let mut active: site::ActiveModel = site.into();
    if let Some(site_name) = req.site_name {
        active.site_name = Set(site_name);
    }
    if let Some(site_code) = req.site_code {
        active.site_code = Set(Some(site_code));
    }
    if let Some(address) = req.address {
        active.address = Set(Some(address));
    }
    if let Some(required_agents) = req.required_agents {
        active.required_agents = Set(required_agents);
    }
    if let Some(status) = req.site_status {
        active.site_status = Set(status);
    }
    active.updated_at = Set(Utc::now());

    match active.update(&db).await {
        Ok(site) => (
            StatusCode::OK,
            Json(ApiResponse::success(site, "Site updated successfully")),
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
