//! Correction workflow: `pending → approved | rejected`.
//!
//! Approving applies the requested clock times to the underlying attendance
//! and re-derives its hours, all in one transaction; rejecting leaves the
//! attendance untouched. Terminal states never transition again.

use crate::error::{DomainError, Result};
use crate::hours;
use chrono::{DateTime, Utc};
use db::models::attendance::{self, AttendanceStatus};
use db::models::correction::{self, CorrectionStatus};
use db::models::{agent, Attendance, Correction};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

#[derive(Debug, Clone)]
pub struct RequestCorrection {
    pub attendance_id: i64,
    pub agent_id: i64,
    pub requested_by: Option<i64>,
    pub reason: String,
    pub requested_clock_in: Option<DateTime<Utc>>,
    pub requested_clock_out: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCorrection {
    pub reason: Option<String>,
    pub requested_clock_in: Option<Option<DateTime<Utc>>>,
    pub requested_clock_out: Option<Option<DateTime<Utc>>>,
}

/// Files a correction request against an attendance record.
///
/// The attendance's current clock times are snapshotted so reviewers can see
/// what the record looked like when the request was made. The attendance
/// itself is not touched until approval.
pub async fn request(
    db: &DatabaseConnection,
    params: RequestCorrection,
) -> Result<correction::Model> {
    if params.reason.trim().is_empty() {
        return Err(DomainError::Validation("reason must not be empty".into()));
    }

    let txn = db.begin().await?;

    let attendance = Attendance::find_by_id(params.attendance_id)
        .one(&txn)
        .await?
        .ok_or_else(|| {
            DomainError::Validation(format!(
                "attendance_id {} does not reference an existing attendance",
                params.attendance_id
            ))
        })?;

    if agent::Entity::find_by_id(params.agent_id)
        .one(&txn)
        .await?
        .is_none()
    {
        return Err(DomainError::Validation(format!(
            "agent_id {} does not reference an existing agent",
            params.agent_id
        )));
    }

    let pending = Correction::find()
        .filter(correction::Column::AttendanceId.eq(params.attendance_id))
        .filter(correction::Column::CorrectionStatus.eq(CorrectionStatus::Pending))
        .count(&txn)
        .await?;
    if pending > 0 {
        return Err(DomainError::DuplicatePendingCorrection);
    }

    let now = Utc::now();
    let model = correction::ActiveModel {
        attendance_id: Set(params.attendance_id),
        agent_id: Set(params.agent_id),
        requested_by: Set(params.requested_by),
        reason: Set(params.reason),
        original_clock_in: Set(attendance.clock_in_time),
        original_clock_out: Set(attendance.clock_out_time),
        requested_clock_in: Set(params.requested_clock_in),
        requested_clock_out: Set(params.requested_clock_out),
        correction_status: Set(CorrectionStatus::Pending),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(correction_id = model.id, attendance_id = model.attendance_id, "correction requested");
    Ok(model)
}

/// Approves a pending correction and applies it to the attendance record.
///
/// Requested clock times override the attendance's current ones; absent
/// requested times leave the current value in place. Hours are re-derived
/// and the attendance moves to `corrected`. Fails with `InvalidTimeRange`
/// before any row is written if the resulting clock pair is invalid.
pub async fn approve(
    db: &DatabaseConnection,
    correction_id: i64,
    reviewed_by: Option<i64>,
    review_notes: Option<String>,
) -> Result<correction::Model> {
    let txn = db.begin().await?;

    let correction = find_pending(&txn, correction_id).await?;

    let attendance = Attendance::find_by_id(correction.attendance_id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound("attendance"))?;

    let new_clock_in = correction.requested_clock_in.or(attendance.clock_in_time);
    let new_clock_out = correction.requested_clock_out.or(attendance.clock_out_time);
    let (total_hours, _) = hours::derive(new_clock_in, new_clock_out)?;

    let now = Utc::now();

    let mut att: attendance::ActiveModel = attendance.into();
    att.clock_in_time = Set(new_clock_in);
    att.clock_out_time = Set(new_clock_out);
    att.total_hours = Set(total_hours);
    att.attendance_status = Set(AttendanceStatus::Corrected);
    att.updated_at = Set(now);
    att.update(&txn).await?;

    let mut corr: correction::ActiveModel = correction.into();
    corr.correction_status = Set(CorrectionStatus::Approved);
    corr.reviewed_by = Set(reviewed_by);
    corr.review_notes = Set(review_notes);
    corr.reviewed_at = Set(Some(now));
    corr.applied_at = Set(Some(now));
    corr.updated_at = Set(now);
    let updated = corr.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(correction_id, attendance_id = updated.attendance_id, "correction approved");
    Ok(updated)
}

/// Rejects a pending correction. The underlying attendance is unchanged.
pub async fn reject(
    db: &DatabaseConnection,
    correction_id: i64,
    reviewed_by: Option<i64>,
    review_notes: Option<String>,
) -> Result<correction::Model> {
    let txn = db.begin().await?;

    let correction = find_pending(&txn, correction_id).await?;

    let now = Utc::now();
    let mut corr: correction::ActiveModel = correction.into();
    corr.correction_status = Set(CorrectionStatus::Rejected);
    corr.reviewed_by = Set(reviewed_by);
    corr.review_notes = Set(review_notes);
    corr.reviewed_at = Set(Some(now));
    corr.updated_at = Set(now);
    let updated = corr.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(correction_id, "correction rejected");
    Ok(updated)
}

/// Edits the reason or requested times of a correction that is still
/// pending.
pub async fn update(
    db: &DatabaseConnection,
    correction_id: i64,
    params: UpdateCorrection,
) -> Result<correction::Model> {
    if let Some(reason) = &params.reason {
        if reason.trim().is_empty() {
            return Err(DomainError::Validation("reason must not be empty".into()));
        }
    }

    let txn = db.begin().await?;

    let correction = find_pending(&txn, correction_id).await?;

    let mut corr: correction::ActiveModel = correction.into();
    if let Some(reason) = params.reason {
        corr.reason = Set(reason);
    }
    if let Some(clock_in) = params.requested_clock_in {
        corr.requested_clock_in = Set(clock_in);
    }
    if let Some(clock_out) = params.requested_clock_out {
        corr.requested_clock_out = Set(clock_out);
    }
    corr.updated_at = Set(Utc::now());
    let updated = corr.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Deletes a correction that is still pending.
pub async fn delete(db: &DatabaseConnection, correction_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let correction = find_pending(&txn, correction_id).await?;
    Correction::delete_by_id(correction.id).exec(&txn).await?;

    txn.commit().await?;
    Ok(())
}

/// Fetches a correction inside the caller's transaction and enforces that
/// it is still pending. Losing a review race therefore surfaces as
/// `InvalidState`, never a second application.
async fn find_pending(
    txn: &DatabaseTransaction,
    correction_id: i64,
) -> Result<correction::Model> {
    let correction = Correction::find_by_id(correction_id)
        .one(txn)
        .await?
        .ok_or(DomainError::NotFound("correction"))?;

    if !correction.is_pending() {
        return Err(DomainError::InvalidState(format!(
            "correction {} has already been processed",
            correction_id
        )));
    }

    Ok(correction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_agent, seed_attendance, seed_site, ts};
    use db::test_utils::setup_test_db;
    use rust_decimal_macros::dec;

    fn valid_request(attendance_id: i64, agent_id: i64) -> RequestCorrection {
        RequestCorrection {
            attendance_id,
            agent_id,
            requested_by: Some(1),
            reason: "forgot to clock out".into(),
            requested_clock_in: None,
            requested_clock_out: Some(ts(2026, 1, 5, 17, 0)),
        }
    }

    #[tokio::test]
    async fn request_snapshots_original_times() {
        let db = setup_test_db().await;
        let agent = seed_agent(&db, "EMP001", dec!(10)).await;
        let site = seed_site(&db).await;
        let att = seed_attendance(
            &db,
            agent.id,
            site.id,
            Some(ts(2026, 1, 5, 8, 0)),
            None,
        )
        .await;

        let corr = request(&db, valid_request(att.id, agent.id)).await.unwrap();
        assert_eq!(corr.correction_status, CorrectionStatus::Pending);
        assert_eq!(corr.original_clock_in, Some(ts(2026, 1, 5, 8, 0)));
        assert_eq!(corr.original_clock_out, None);
    }

    #[tokio::test]
    async fn request_with_empty_reason_fails() {
        let db = setup_test_db().await;
        let agent = seed_agent(&db, "EMP001", dec!(10)).await;
        let site = seed_site(&db).await;
        let att = seed_attendance(&db, agent.id, site.id, None, None).await;

        let mut params = valid_request(att.id, agent.id);
        params.reason = "   ".into();
        let err = request(&db, params).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn request_against_unknown_attendance_fails() {
        let db = setup_test_db().await;
        let agent = seed_agent(&db, "EMP001", dec!(10)).await;

        let err = request(&db, valid_request(9999, agent.id)).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn second_pending_request_is_rejected() {
        let db = setup_test_db().await;
        let agent = seed_agent(&db, "EMP001", dec!(10)).await;
        let site = seed_site(&db).await;
        let att = seed_attendance(&db, agent.id, site.id, None, None).await;

        request(&db, valid_request(att.id, agent.id)).await.unwrap();
        let err = request(&db, valid_request(att.id, agent.id)).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicatePendingCorrection));
    }

    #[tokio::test]
    async fn resolved_correction_allows_a_new_request() {
        let db = setup_test_db().await;
        let agent = seed_agent(&db, "EMP001", dec!(10)).await;
        let site = seed_site(&db).await;
        let att = seed_attendance(&db, agent.id, site.id, None, None).await;

        let first = request(&db, valid_request(att.id, agent.id)).await.unwrap();
        reject(&db, first.id, Some(2), None).await.unwrap();

        // no longer pending, so a fresh request is legal
        request(&db, valid_request(att.id, agent.id)).await.unwrap();
    }

    #[tokio::test]
    async fn approve_applies_times_and_marks_corrected() {
        let db = setup_test_db().await;
        let agent = seed_agent(&db, "EMP001", dec!(10)).await;
        let site = seed_site(&db).await;
        let att = seed_attendance(
            &db,
            agent.id,
            site.id,
            Some(ts(2026, 1, 5, 8, 0)),
            None,
        )
        .await;
        assert_eq!(att.attendance_status, AttendanceStatus::Missing);

        let corr = request(&db, valid_request(att.id, agent.id)).await.unwrap();
        let approved = approve(&db, corr.id, Some(7), Some("checked logs".into()))
            .await
            .unwrap();

        assert_eq!(approved.correction_status, CorrectionStatus::Approved);
        assert_eq!(approved.reviewed_by, Some(7));
        assert!(approved.reviewed_at.is_some());
        assert!(approved.applied_at.is_some());

        let att = Attendance::find_by_id(att.id).one(&db).await.unwrap().unwrap();
        assert_eq!(att.attendance_status, AttendanceStatus::Corrected);
        assert_eq!(att.clock_out_time, Some(ts(2026, 1, 5, 17, 0)));
        assert_eq!(att.total_hours, dec!(9.00));
    }

    #[tokio::test]
    async fn approve_twice_fails_and_leaves_attendance_alone() {
        let db = setup_test_db().await;
        let agent = seed_agent(&db, "EMP001", dec!(10)).await;
        let site = seed_site(&db).await;
        let att = seed_attendance(
            &db,
            agent.id,
            site.id,
            Some(ts(2026, 1, 5, 8, 0)),
            None,
        )
        .await;

        let corr = request(&db, valid_request(att.id, agent.id)).await.unwrap();
        approve(&db, corr.id, Some(7), None).await.unwrap();
        let snapshot = Attendance::find_by_id(att.id).one(&db).await.unwrap().unwrap();

        let err = approve(&db, corr.id, Some(7), None).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));

        let after = Attendance::find_by_id(att.id).one(&db).await.unwrap().unwrap();
        assert_eq!(after, snapshot);
    }

    #[tokio::test]
    async fn reject_leaves_attendance_untouched() {
        let db = setup_test_db().await;
        let agent = seed_agent(&db, "EMP001", dec!(10)).await;
        let site = seed_site(&db).await;
        let att = seed_attendance(
            &db,
            agent.id,
            site.id,
            Some(ts(2026, 1, 5, 8, 0)),
            None,
        )
        .await;

        let corr = request(&db, valid_request(att.id, agent.id)).await.unwrap();
        let rejected = reject(&db, corr.id, Some(7), Some("no evidence".into()))
            .await
            .unwrap();
        assert_eq!(rejected.correction_status, CorrectionStatus::Rejected);
        assert!(rejected.applied_at.is_none());

        let after = Attendance::find_by_id(att.id).one(&db).await.unwrap().unwrap();
        assert_eq!(after.attendance_status, AttendanceStatus::Missing);
        assert_eq!(after.clock_out_time, None);

        let err = approve(&db, corr.id, Some(7), None).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[tokio::test]
    async fn approve_with_invalid_requested_times_fails_cleanly() {
        let db = setup_test_db().await;
        let agent = seed_agent(&db, "EMP001", dec!(10)).await;
        let site = seed_site(&db).await;
        let att = seed_attendance(
            &db,
            agent.id,
            site.id,
            Some(ts(2026, 1, 5, 8, 0)),
            None,
        )
        .await;

        let mut params = valid_request(att.id, agent.id);
        // requested clock-out lands before the existing clock-in
        params.requested_clock_out = Some(ts(2026, 1, 5, 6, 0));
        let corr = request(&db, params).await.unwrap();

        let err = approve(&db, corr.id, Some(7), None).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidTimeRange));

        // nothing was applied: correction still pending, attendance untouched
        let corr = Correction::find_by_id(corr.id).one(&db).await.unwrap().unwrap();
        assert!(corr.is_pending());
        let after = Attendance::find_by_id(att.id).one(&db).await.unwrap().unwrap();
        assert_eq!(after.attendance_status, AttendanceStatus::Missing);
    }

    #[tokio::test]
    async fn approve_unknown_correction_is_not_found() {
        let db = setup_test_db().await;
        let err = approve(&db, 424242, None, None).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_and_delete_require_pending() {
        let db = setup_test_db().await;
        let agent = seed_agent(&db, "EMP001", dec!(10)).await;
        let site = seed_site(&db).await;
        let att = seed_attendance(&db, agent.id, site.id, None, None).await;

        let corr = request(&db, valid_request(att.id, agent.id)).await.unwrap();
        let edited = update(
            &db,
            corr.id,
            UpdateCorrection {
                reason: Some("badge reader was down".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(edited.reason, "badge reader was down");

        reject(&db, corr.id, None, None).await.unwrap();

        let err = update(&db, corr.id, UpdateCorrection::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
        let err = delete(&db, corr.id).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }
}
