//! Client creation routes.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use db::models::client::{self, ContractStatus};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::clients::common::CreateClientRequest;

/// POST /api/clients
///
/// Register a client company. New clients default to an `active` contract.
///
/// ### Responses
/// - `201 Created` with the stored client
/// - `400 Bad Request` (validation failure)
pub async fn create_client(
    State(db): State<DatabaseConnection>,
    Json(req): Json<CreateClientRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<client::Model>::error(
                common::format_validation_errors(&validation_errors),
            )),
        );
    }

    let now = Utc::now();
    let result = client::ActiveModel {
        company_name: Set(req.company_name),
        contact_name: Set(req.contact_name),
        contact_email: Set(req.contact_email),
        contact_phone: Set(req.contact_phone),
        address: Set(req.address),
        city: Set(req.city),
        contract_status: Set(req.contract_status.unwrap_or(ContractStatus::Active)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await;

    match result {
        Ok(client) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(client, "Client created successfully")),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
