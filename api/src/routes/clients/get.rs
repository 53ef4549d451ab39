//! Client retrieval routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::Client;
use db::models::client::{self, ContractStatus};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Deserialize;
use services::queries::{self, ClientFilter, Page};

use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct ListClientsQuery {
    pub status: Option<ContractStatus>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET /api/clients
///
/// List clients in ascending id order, optionally filtered by contract
/// status.
pub async fn get_clients(
    State(db): State<DatabaseConnection>,
    Query(query): Query<ListClientsQuery>,
) -> impl IntoResponse {
    let page = Page::new(query.page, query.per_page);
    let filter = ClientFilter {
        status: query.status,
    };

    match queries::list_clients(&db, filter, page).await {
        Ok(clients) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                clients,
                "Clients retrieved successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}

/// GET /api/clients/{client_id}
pub async fn get_client(
    State(db): State<DatabaseConnection>,
    Path(client_id): Path<i64>,
) -> impl IntoResponse {
    match Client::find_by_id(client_id).one(&db).await {
        Ok(Some(client)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                client,
                "Client retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<client::Model>::error("Client not found")),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
