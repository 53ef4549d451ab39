//! Route group for `/api/corrections`.
//!
//! Filing, editing and deleting are available to any authenticated caller;
//! `approve` and `reject` are review actions and require the `admin`
//! claim.

use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use sea_orm::DatabaseConnection;

use crate::auth::guards::allow_admin;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_correction;
use get::{get_correction, get_corrections};
use post::{approve_correction, create_correction, reject_correction};
use put::edit_correction;

pub fn corrections_routes() -> Router<DatabaseConnection> {
    Router::new()
        .route("/", get(get_corrections))
        .route("/", post(create_correction))
        .route("/{correction_id}", get(get_correction))
        .route("/{correction_id}", put(edit_correction))
        .route("/{correction_id}", delete(delete_correction))
        .route(
            "/{correction_id}/approve",
            post(approve_correction).route_layer(from_fn(allow_admin)),
        )
        .route(
            "/{correction_id}/reject",
            post(reject_correction).route_layer(from_fn(allow_admin)),
        )
}
