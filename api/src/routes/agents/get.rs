//! Agent retrieval routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::Agent;
use db::models::agent::{self, EmploymentStatus};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Deserialize;
use services::queries::{self, AgentFilter, Page};

use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct ListAgentsQuery {
    pub status: Option<EmploymentStatus>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET /api/agents
///
/// List agents in ascending id order. Supports `status` plus `page` /
/// `per_page` (defaults 1 / 50). A page past the end is `200` with an
/// empty array.
///
/// ### Response
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "employee_code": "EMP001",
///       "first_name": "Jean",
///       "last_name": "Baptiste",
///       "hourly_rate": "10.00",
///       "employment_status": "active"
///     }
///   ],
///   "message": "Agents retrieved successfully"
/// }
/// ```
pub async fn get_agents(
    State(db): State<DatabaseConnection>,
    Query(query): Query<ListAgentsQuery>,
) -> impl IntoResponse {
    let page = Page::new(query.page, query.per_page);
    let filter = AgentFilter {
        status: query.status,
    };

    match queries::list_agents(&db, filter, page).await {
        Ok(agents) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                agents,
                "Agents retrieved successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}

/// GET /api/agents/{agent_id}
///
/// ### Responses
/// - `200 OK` with the agent
/// - `404 Not Found`
pub async fn get_agent(
    State(db): State<DatabaseConnection>,
    Path(agent_id): Path<i64>,
) -> impl IntoResponse {
    match Agent::find_by_id(agent_id).one(&db).await {
        Ok(Some(agent)) => (
            StatusCode::OK,
            Json(ApiResponse::success(agent, "Agent retrieved successfully")),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<agent::Model>::error("Agent not found")),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
