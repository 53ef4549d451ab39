//! Site retrieval routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::Site;
use db::models::site::{self, SiteStatus};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Deserialize;
use services::queries::{self, Page, SiteFilter};

use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct ListSitesQuery {
    pub client_id: Option<i64>,
    pub status: Option<SiteStatus>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET /api/sites
///
/// List sites in ascending id order. Supports `client_id` and `status`
/// filters.
pub async fn get_sites(
    State(db): State<DatabaseConnection>,
    Query(query): Query<ListSitesQuery>,
) -> impl IntoResponse {
    let page = Page::new(query.page, query.per_page);
    let filter = SiteFilter {
        client_id: query.client_id,
        status: query.status,
    };

    match queries::list_sites(&db, filter, page).await {
        Ok(sites) => (
            StatusCode::OK,
            Json(ApiResponse::success(sites, "Sites retrieved successfully")),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}

/// GET /api/sites/{site_id}
pub async fn get_site(
    State(db): State<DatabaseConnection>,
    Path(site_id): Path<i64>,
) -> impl IntoResponse {
    match Site::find_by_id(site_id).one(&db).await {
        Ok(Some(site)) => (
            StatusCode::OK,
            Json(ApiResponse::success(site, "Site retrieved successfully")),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<site::Model>::error("Site not found")),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
