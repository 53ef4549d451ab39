//! Route group for `/api/attendances`.
//!
//! Attendance rows never take `total_hours` or a `corrected` status from
//! the caller: hours and status are derived from the clock pair on every
//! create and edit, and `corrected` is only ever set by the correction
//! workflow.

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

use delete::delete_attendance;
use get::{get_attendance, get_attendances};
use post::create_attendance;
use put::edit_attendance;

pub fn attendances_routes() -> Router<DatabaseConnection> {
    Router::new()
        .route("/", get(get_attendances))
        .route("/", post(create_attendance))
        .route("/{attendance_id}", get(get_attendance))
        .route("/{attendance_id}", put(edit_attendance))
        .route("/{attendance_id}", delete(delete_attendance))
}
