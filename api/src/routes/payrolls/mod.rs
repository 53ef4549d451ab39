//! Route group for `/api/payrolls`.
//!
//! Generation, edits and deletes are available to any authenticated
//! caller while the payroll is pending; marking a payroll as paid is an
//! admin action and completed payrolls are immutable.

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

use delete::delete_payroll;
use get::{get_payroll, get_payrolls};
use post::{complete_payroll, generate_payroll};
use put::edit_payroll;

pub fn payrolls_routes() -> Router<DatabaseConnection> {
    Router::new()
        .route("/", get(get_payrolls))
        .route("/", post(generate_payroll))
        .route("/{payroll_id}", get(get_payroll))
        .route("/{payroll_id}", put(edit_payroll))
        .route("/{payroll_id}", delete(delete_payroll))
        .route(
            "/{payroll_id}/complete",
            post(complete_payroll).route_layer(from_fn(allow_admin)),
        )
}
