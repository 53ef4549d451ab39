//! Route group for `/api/sites`.

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

use delete::delete_site;
use get::{get_site, get_sites};
use post::create_site;
use put::edit_site;

pub fn sites_routes() -> Router<DatabaseConnection> {
    Router::new()
        .route("/", get(get_sites))
        .route("/", post(create_site))
        .route("/{site_id}", get(get_site))
        .route("/{site_id}", put(edit_site))
        .route("/{site_id}", delete(delete_site))
}
