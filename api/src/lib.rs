//! HTTP boundary for the workforce management backend.
//!
//! Exposes the route tree, the JWT auth layer and the `ApiResponse`
//! envelope. Everything stateful lives behind a `DatabaseConnection`;
//! domain rules are enforced in the `services` crate, this crate only
//! translates between HTTP and the domain.

pub mod auth;
pub mod response;
pub mod routes;
