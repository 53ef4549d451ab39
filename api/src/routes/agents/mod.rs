//! Route group for `/api/agents`.
//!
//! - `get.rs` — list agents (filter by status) and fetch one
//! - `post.rs` — register an agent
//! - `put.rs` — edit agent details
//! - `delete.rs` — remove an agent

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

use delete::delete_agent;
use get::{get_agent, get_agents};
use post::create_agent;
use put::edit_agent;

pub fn agents_routes() -> Router<DatabaseConnection> {
    Router::new()
        .route("/", get(get_agents))
        .route("/", post(create_agent))
        .route("/{agent_id}", get(get_agent))
        .route("/{agent_id}", put(edit_agent))
        .route("/{agent_id}", delete(delete_agent))
}
