use thiserror::Error;

/// Failure modes of the domain core. The HTTP layer owns the mapping to
/// status codes; nothing here knows about transport.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("attendance already has a pending correction")]
    DuplicatePendingCorrection,

    #[error("clock-out must be on the same or next calendar day, at or after clock-in")]
    InvalidTimeRange,

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

pub type Result<T> = std::result::Result<T, DomainError>;
