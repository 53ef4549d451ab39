use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCorrectionRequest {
    pub attendance_id: i64,
    pub agent_id: i64,
    #[validate(length(min = 1, message = "reason is required"))]
    pub reason: String,
    pub requested_clock_in: Option<DateTime<Utc>>,
    pub requested_clock_out: Option<DateTime<Utc>>,
}

/// The requested clock pair is replaced as a whole by the body values;
/// an omitted `reason` keeps the stored one.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateCorrectionRequest {
    #[validate(length(min = 1, message = "reason must not be empty"))]
    pub reason: Option<String>,
    pub requested_clock_in: Option<DateTime<Utc>>,
    pub requested_clock_out: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ReviewCorrectionRequest {
    pub review_notes: Option<String>,
}
