//! Domain and workflow core for the workforce-management backend.
//!
//! Everything here is synchronous request/response over a database
//! connection: no background tasks, no timers. Mutating operations run
//! inside a transaction and re-check lifecycle state on the rows they
//! transition, so a lost race observes `InvalidState` instead of a double
//! application.

pub mod corrections;
pub mod error;
pub mod hours;
pub mod payroll;
pub mod queries;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{DomainError, Result};
