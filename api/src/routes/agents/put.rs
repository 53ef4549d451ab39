//! Agent editing routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use db::models::Agent;
use db::models::agent;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::agents::common::UpdateAgentRequest;

/// PUT /api/agents/{agent_id}
///
/// Edit agent details. Omitted fields are left unchanged. Changing the
/// hourly rate only affects payrolls generated afterwards; existing
/// payrolls keep their snapshotted rate.
///
/// ### Responses
/// - `200 OK` with the updated agent
/// - `400 Bad Request` (validation failure, negative hourly rate)
/// - `404 Not Found`
/// - `409 Conflict` (duplicate employee code or national id)
pub async fn edit_agent(
    State(db): State<DatabaseConnection>,
    Path(agent_id): Path<i64>,
    Json(req): Json<UpdateAgentRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<agent::Model>::error(
                common::format_validation_errors(&validation_errors),
            )),
        );
    }

    if let Some(rate) = req.hourly_rate {
        if rate < Decimal::ZERO {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<agent::Model>::error(
                    "hourly_rate must be non-negative",
                )),
            );
        }
    }

    let agent = match Agent::find_by_id(agent_id).one(&db).await {
        Ok(Some(agent)) => agent,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<agent::Model>::error("Agent not found")),
            );
        }
        Err(e) => return crate::routes::common::domain_error_response(e.into()),
    };

    let mut active: agent::ActiveModel = agent.into();
    if let Some(employee_code) = req.employee_code {
        active.employee_code = Set(employee_code);
    }
    if let Some(first_name) = req.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(last_name) = req.last_name {
        active.last_name = Set(last_name);
    }
    if let Some(national_id) = req.national_id {
        active.national_id = Set(Some(national_id));
    }
    if let Some(email) = req.email {
        active.email = Set(Some(email));
    }
    if let Some(phone) = req.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(rate) = req.hourly_rate {
        active.hourly_rate = Set(rate);
    }
    if let Some(status) = req.employment_status {
        active.employment_status = Set(status);
    }
    active.updated_at = Set(Utc::now());

    match active.update(&db).await {
        Ok(agent) => (
            StatusCode::OK,
            Json(ApiResponse::success(agent, "Agent updated successfully")),
        ),
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint failed: agents.employee_code") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<agent::Model>::error(
                        "An agent with this employee code already exists",
                    )),
                );
            }
            if msg.contains("UNIQUE constraint failed: agents.national_id") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<agent::Model>::error(
                        "An agent with this national id already exists",
                    )),
                );
            }
            tracing::error!(error = %e, agent_id, "failed to update agent");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<agent::Model>::error("Database error")),
            )
        }
    }
}
