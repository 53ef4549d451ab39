//! Agent creation routes.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use db::models::agent::{self, EmploymentStatus};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::agents::common::CreateAgentRequest;

/// POST /api/agents
///
/// Register a new agent.
///
/// ### Request Body
/// ```json
/// {
///   "employee_code": "EMP001",
///   "first_name": "Jean",
///   "last_name": "Baptiste",
///   "hourly_rate": "10.00",
///   "email": "jean@example.com"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored agent
/// - `400 Bad Request` (validation failure, negative hourly rate)
/// - `409 Conflict` (duplicate employee code or national id)
/// - `500 Internal Server Error`
pub async fn create_agent(
    State(db): State<DatabaseConnection>,
    Json(req): Json<CreateAgentRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<agent::Model>::error(
                common::format_validation_errors(&validation_errors),
            )),
        );
    }

    if req.hourly_rate < Decimal::ZERO {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<agent::Model>::error(
                "hourly_rate must be non-negative",
            )),
        );
    }

    let now = Utc::now();
    let result = agent::ActiveModel {
        employee_code: Set(req.employee_code),
        first_name: Set(req.first_name),
        last_name: Set(req.last_name),
        national_id: Set(req.national_id),
        email: Set(req.email),
        phone: Set(req.phone),
        hourly_rate: Set(req.hourly_rate),
        employment_status: Set(req.employment_status.unwrap_or(EmploymentStatus::Active)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await;

    match result {
        Ok(agent) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(agent, "Agent created successfully")),
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
            tracing::error!(error = %e, "failed to create agent");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<agent::Model>::error("Database error")),
            )
        }
    }
}
