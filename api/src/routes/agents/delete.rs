//! Agent removal routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::Agent;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait};

use crate::response::{ApiResponse, Empty};

/// DELETE /api/agents/{agent_id}
///
/// Remove an agent. Attendance, correction and payroll rows referencing the
/// agent are removed with it (cascading foreign keys).
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found`
pub async fn delete_agent(
    State(db): State<DatabaseConnection>,
    Path(agent_id): Path<i64>,
) -> impl IntoResponse {
    let agent = match Agent::find_by_id(agent_id).one(&db).await {
        Ok(Some(agent)) => agent,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Agent not found")),
            );
        }
        Err(e) => return crate::routes::common::domain_error_response(e.into()),
    };

    match agent.delete(&db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Agent deleted successfully")),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
