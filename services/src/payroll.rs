//! Payroll engine: aggregates an agent's finalized attendance hours over a
//! pay period, snapshots the hourly rate, and owns the
//! `pending → completed` payment lifecycle.

use crate::error::{DomainError, Result};
use chrono::{NaiveDate, Utc};
use db::models::attendance::{self, AttendanceStatus};
use db::models::payroll::{self, PaymentStatus};
use db::models::{Agent, Attendance, Payroll};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};

#[derive(Debug, Clone)]
pub struct GeneratePayroll {
    pub agent_id: i64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// Defaults to zero when the caller supplies nothing.
    pub deductions: Option<Decimal>,
}

/// Generates a payroll for one agent over one period.
///
/// Hours are the sum of `present` and `corrected` attendance hours with
/// `attendance_date` inside the period; missing/absent records contribute
/// nothing and do not block generation. The sum is accumulated in decimal
/// and rounding to 2 decimals happens only on the final gross/net figures.
/// Periods that overlap an existing payroll for the same agent are refused.
pub async fn generate(db: &DatabaseConnection, params: GeneratePayroll) -> Result<payroll::Model> {
    if params.period_start > params.period_end {
        return Err(DomainError::Validation(
            "pay_period_start must not be after pay_period_end".into(),
        ));
    }

    let deductions = params.deductions.unwrap_or(Decimal::ZERO);
    if deductions < Decimal::ZERO {
        return Err(DomainError::Validation(
            "deductions must be non-negative".into(),
        ));
    }

    let txn = db.begin().await?;

    let agent = Agent::find_by_id(params.agent_id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound("agent"))?;

    let overlapping = Payroll::find()
        .filter(payroll::Column::AgentId.eq(params.agent_id))
        .filter(payroll::Column::PayPeriodStart.lte(params.period_end))
        .filter(payroll::Column::PayPeriodEnd.gte(params.period_start))
        .one(&txn)
        .await?;
    if let Some(existing) = overlapping {
        return Err(DomainError::Validation(format!(
            "pay period overlaps payroll {} ({} to {})",
            existing.id, existing.pay_period_start, existing.pay_period_end
        )));
    }

    let attendances = Attendance::find()
        .filter(attendance::Column::AgentId.eq(params.agent_id))
        .filter(attendance::Column::AttendanceDate.gte(params.period_start))
        .filter(attendance::Column::AttendanceDate.lte(params.period_end))
        .filter(
            attendance::Column::AttendanceStatus
                .is_in([AttendanceStatus::Present, AttendanceStatus::Corrected]),
        )
        .all(&txn)
        .await?;

    let total_hours: Decimal = attendances.iter().map(|a| a.payable_hours()).sum();

    let hourly_rate = agent.hourly_rate;
    let gross_pay = (total_hours * hourly_rate).round_dp(2);
    if deductions > gross_pay {
        return Err(DomainError::Validation(format!(
            "deductions {} exceed gross pay {}",
            deductions, gross_pay
        )));
    }
    let net_pay = (gross_pay - deductions).round_dp(2);

    let now = Utc::now();
    let model = payroll::ActiveModel {
        agent_id: Set(params.agent_id),
        pay_period_start: Set(params.period_start),
        pay_period_end: Set(params.period_end),
        total_hours: Set(total_hours),
        hourly_rate: Set(hourly_rate),
        gross_pay: Set(gross_pay),
        deductions: Set(deductions),
        net_pay: Set(net_pay),
        payment_status: Set(PaymentStatus::Pending),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(
        payroll_id = model.id,
        agent_id = model.agent_id,
        %total_hours,
        %gross_pay,
        "payroll generated"
    );
    Ok(model)
}

/// Transitions a payroll from `pending` to `completed` and stamps
/// `paid_at`. Completed payrolls are immutable, so a second call fails.
pub async fn mark_completed(db: &DatabaseConnection, payroll_id: i64) -> Result<payroll::Model> {
    let txn = db.begin().await?;

    let payroll = find_pending(&txn, payroll_id).await?;

    let now = Utc::now();
    let mut active: payroll::ActiveModel = payroll.into();
    active.payment_status = Set(PaymentStatus::Completed);
    active.paid_at = Set(Some(now));
    active.updated_at = Set(now);
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(payroll_id, "payroll completed");
    Ok(updated)
}

/// Adjusts the deductions of a payroll that is still pending and
/// recomputes net pay.
pub async fn update_deductions(
    db: &DatabaseConnection,
    payroll_id: i64,
    deductions: Decimal,
) -> Result<payroll::Model> {
    if deductions < Decimal::ZERO {
        return Err(DomainError::Validation(
            "deductions must be non-negative".into(),
        ));
    }

    let txn = db.begin().await?;

    let payroll = find_pending(&txn, payroll_id).await?;
    if deductions > payroll.gross_pay {
        return Err(DomainError::Validation(format!(
            "deductions {} exceed gross pay {}",
            deductions, payroll.gross_pay
        )));
    }

    let net_pay = (payroll.gross_pay - deductions).round_dp(2);
    let mut active: payroll::ActiveModel = payroll.into();
    active.deductions = Set(deductions);
    active.net_pay = Set(net_pay);
    active.updated_at = Set(Utc::now());
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Deletes a payroll that is still pending.
pub async fn delete(db: &DatabaseConnection, payroll_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let payroll = find_pending(&txn, payroll_id).await?;
    Payroll::delete_by_id(payroll.id).exec(&txn).await?;

    txn.commit().await?;
    Ok(())
}

async fn find_pending(txn: &DatabaseTransaction, payroll_id: i64) -> Result<payroll::Model> {
    let payroll = Payroll::find_by_id(payroll_id)
        .one(txn)
        .await?
        .ok_or(DomainError::NotFound("payroll"))?;

    if payroll.is_completed() {
        return Err(DomainError::InvalidState(format!(
            "payroll {} is already completed",
            payroll_id
        )));
    }

    Ok(payroll)
}
