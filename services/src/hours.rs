//! Attendance hours calculator.
//!
//! Pure function of its inputs; the correction workflow and the attendance
//! handlers both re-derive hours through here so the invariant lives in one
//! place.

use crate::error::{DomainError, Result};
use chrono::{DateTime, Utc};
use db::models::attendance::AttendanceStatus;
use rust_decimal::Decimal;

const SECONDS_PER_HOUR: i64 = 3600;

/// Derives `total_hours` and the attendance status from an optional clock
/// pair.
///
/// - Both present and valid: hours = (out − in), rounded to 2 decimals,
///   status `present`.
/// - Either missing: 0 hours, status `missing`.
/// - Out before in, or out later than the next calendar day (overnight
///   shifts are allowed, longer gaps are not): `InvalidTimeRange`.
pub fn derive(
    clock_in: Option<DateTime<Utc>>,
    clock_out: Option<DateTime<Utc>>,
) -> Result<(Decimal, AttendanceStatus)> {
    let (clock_in, clock_out) = match (clock_in, clock_out) {
        (Some(i), Some(o)) => (i, o),
        _ => return Ok((Decimal::ZERO, AttendanceStatus::Missing)),
    };

    if clock_out < clock_in {
        return Err(DomainError::InvalidTimeRange);
    }

    let day_span = clock_out
        .date_naive()
        .signed_duration_since(clock_in.date_naive())
        .num_days();
    if day_span > 1 {
        return Err(DomainError::InvalidTimeRange);
    }

    let seconds = (clock_out - clock_in).num_seconds();
    let hours = (Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)).round_dp(2);

    Ok((hours, AttendanceStatus::Present))
}
