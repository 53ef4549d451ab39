//! Correction retrieval routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::Correction;
use db::models::correction::{self, CorrectionStatus};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Deserialize;
use services::queries::{self, CorrectionFilter, Page};

use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct ListCorrectionsQuery {
    pub agent_id: Option<i64>,
    pub attendance_id: Option<i64>,
    pub status: Option<CorrectionStatus>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET /api/corrections
///
/// List corrections in ascending id order. Supports `agent_id`,
/// `attendance_id` and `status` filters.
pub async fn get_corrections(
    State(db): State<DatabaseConnection>,
    Query(query): Query<ListCorrectionsQuery>,
) -> impl IntoResponse {
    let page = Page::new(query.page, query.per_page);
    let filter = CorrectionFilter {
        agent_id: query.agent_id,
        attendance_id: query.attendance_id,
        status: query.status,
    };

    match queries::list_corrections(&db, filter, page).await {
        Ok(corrections) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                corrections,
                "Corrections retrieved successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}

/// GET /api/corrections/{correction_id}
pub async fn get_correction(
    State(db): State<DatabaseConnection>,
    Path(correction_id): Path<i64>,
) -> impl IntoResponse {
    match Correction::find_by_id(correction_id).one(&db).await {
        Ok(Some(correction)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                correction,
                "Correction retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<correction::Model>::error(
                "Correction not found",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
