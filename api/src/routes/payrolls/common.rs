use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeneratePayrollRequest {
    pub agent_id: i64,
    pub pay_period_start: NaiveDate,
    pub pay_period_end: NaiveDate,
    pub deductions: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePayrollRequest {
    pub deductions: Decimal,
}
