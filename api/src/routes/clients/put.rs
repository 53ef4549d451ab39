//! Client editing routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use db::models::Client;
use db::models::client;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::clients::common::UpdateClientRequest;

/// PUT /api/clients/{client_id}
///
/// Edit client details. Omitted fields are left unchanged. Suspending or
/// terminating a contract does not touch the client's sites.
pub async fn edit_client(
    State(db): State<DatabaseConnection>,
    Path(client_id): Path<i64>,
    Json(req): Json<UpdateClientRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<client::Model>::error(
                common::format_validation_errors(&validation_errors),
            )),
        );
    }

    let client = match Client::find_by_id(client_id).one(&db).await {
        Ok(Some(client)) => client,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<client::Model>::error("Client not found")),
            );
        }
        Err(e) => return crate::routes::common::domain_error_response(e.into()),
    };

    let mut active: client::ActiveModel = client.into();
    if let Some(company_name) = req.company_name {
        active.company_name = Set(company_name);
    }
    if let Some(contact_name) = req.contact_name {
        active.contact_name = Set(contact_name);
    }
    if let Some(contact_email) = req.contact_email {
        active.contact_email = Set(contact_email);
    }
    if let Some(contact_phone) = req.contact_phone {
        active.contact_phone = Set(Some(contact_phone));
    }
    if let Some(address) = req.address {
        active.address = Set(Some(address));
    }
    if let Some(city) = req.city {
        active.city = Set(Some(city));
    }
    if let Some(status) = req.contract_status {
        active.contract_status = Set(status);
    }
    active.updated_at = Set(Utc::now());

    match active.update(&db).await {
        Ok(client) => (
            StatusCode::OK,
            Json(ApiResponse::success(client, "Client updated successfully")),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
