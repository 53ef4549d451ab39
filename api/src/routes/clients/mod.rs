//! Route group for `/api/clients`.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use sea_orm::DatabaseConnection;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_client;
use get::{get_client, get_clients};
use post::create_client;
use put::edit_client;

pub fn clients_routes() -> Router<DatabaseConnection> {
    Router::new()
        .route("/", get(get_clients))
        .route("/", post(create_client))
        .route("/{client_id}", get(get_client))
        .route("/{client_id}", put(edit_client))
        .route("/{client_id}", delete(delete_client))
}
