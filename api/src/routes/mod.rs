//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe (public)
//! - `/agents` → agent management
//! - `/clients` → client companies
//! - `/sites` → client sites
//! - `/attendances` → attendance records and hours
//! - `/corrections` → correction requests and review
//! - `/payrolls` → payroll generation and payment
//!
//! Everything except `/health` requires a valid bearer token; correction
//! review and payroll payment additionally require the `admin` claim.

use crate::auth::guards::allow_authenticated;
use crate::routes::{
    agents::agents_routes, attendances::attendances_routes, clients::clients_routes,
    corrections::corrections_routes, health::health_routes, payrolls::payrolls_routes,
    sites::sites_routes,
};
use axum::{Router, middleware::from_fn};
use sea_orm::DatabaseConnection;

pub mod agents;
pub mod attendances;
pub mod clients;
pub mod common;
pub mod corrections;
pub mod health;
pub mod payrolls;
pub mod sites;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router is self-contained: the database connection is baked
/// in as state, so callers only need to `nest("/api", routes(db))`.
pub fn routes(db: DatabaseConnection) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest(
            "/agents",
            agents_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/clients",
            clients_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/sites",
            sites_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/attendances",
            attendances_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/corrections",
            corrections_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/payrolls",
            payrolls_routes().route_layer(from_fn(allow_authenticated)),
        )
        .with_state(db)
}
