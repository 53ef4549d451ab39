//! Read-side listing with per-entity filters and pagination.
//!
//! Every list is ordered by ascending id so pages are stable between
//! requests. Filters combine with AND; an empty filter lists everything.

use crate::error::Result;
use chrono::NaiveDate;
use db::models::agent::{self, EmploymentStatus};
use db::models::attendance::{self, AttendanceStatus};
use db::models::client::{self, ContractStatus};
use db::models::correction::{self, CorrectionStatus};
use db::models::payroll::{self, PaymentStatus};
use db::models::site::{self, SiteStatus};
use db::models::{Agent, Attendance, Client, Correction, Payroll, Site};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

pub const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub page: u64,
    pub per_page: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self { page: 1, per_page: 50 }
    }
}

impl Page {
    /// Page numbers start at 1; out-of-range values are clamped rather than
    /// rejected.
    pub fn new(page: Option<u64>, per_page: Option<u64>) -> Self {
        let defaults = Self::default();
        Self {
            page: page.unwrap_or(defaults.page).max(1),
            per_page: per_page
                .unwrap_or(defaults.per_page)
                .clamp(1, MAX_PER_PAGE),
        }
    }
}

async fn fetch<E>(db: &DatabaseConnection, query: Select<E>, page: Page) -> Result<Vec<E::Model>>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    let paginator = query.paginate(db, page.per_page);
    let rows = paginator.fetch_page(page.page - 1).await?;
    Ok(rows)
}

#[derive(Debug, Clone, Default)]
pub struct AgentFilter {
    pub status: Option<EmploymentStatus>,
}

pub async fn list_agents(
    db: &DatabaseConnection,
    filter: AgentFilter,
    page: Page,
) -> Result<Vec<agent::Model>> {
    let mut query = Agent::find().order_by_asc(agent::Column::Id);
    if let Some(status) = filter.status {
        query = query.filter(agent::Column::EmploymentStatus.eq(status));
    }
    fetch(db, query, page).await
}

#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub status: Option<ContractStatus>,
}

pub async fn list_clients(
    db: &DatabaseConnection,
    filter: ClientFilter,
    page: Page,
) -> Result<Vec<client::Model>> {
    let mut query = Client::find().order_by_asc(client::Column::Id);
    if let Some(status) = filter.status {
        query = query.filter(client::Column::ContractStatus.eq(status));
    }
    fetch(db, query, page).await
}

#[derive(Debug, Clone, Default)]
pub struct SiteFilter {
    pub client_id: Option<i64>,
    pub status: Option<SiteStatus>,
}

pub async fn list_sites(
    db: &DatabaseConnection,
    filter: SiteFilter,
    page: Page,
) -> Result<Vec<site::Model>> {
    let mut query = Site::find().order_by_asc(site::Column::Id);
    if let Some(client_id) = filter.client_id {
        query = query.filter(site::Column::ClientId.eq(client_id));
    }
    if let Some(status) = filter.status {
        query = query.filter(site::Column::SiteStatus.eq(status));
    }
    fetch(db, query, page).await
}

#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub agent_id: Option<i64>,
    pub site_id: Option<i64>,
    pub status: Option<AttendanceStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub async fn list_attendances(
    db: &DatabaseConnection,
    filter: AttendanceFilter,
    page: Page,
) -> Result<Vec<attendance::Model>> {
    let mut query = Attendance::find().order_by_asc(attendance::Column::Id);
    if let Some(agent_id) = filter.agent_id {
        query = query.filter(attendance::Column::AgentId.eq(agent_id));
    }
    if let Some(site_id) = filter.site_id {
        query = query.filter(attendance::Column::SiteId.eq(site_id));
    }
    if let Some(status) = filter.status {
        query = query.filter(attendance::Column::AttendanceStatus.eq(status));
    }
    if let Some(start) = filter.start_date {
        query = query.filter(attendance::Column::AttendanceDate.gte(start));
    }
    if let Some(end) = filter.end_date {
        query = query.filter(attendance::Column::AttendanceDate.lte(end));
    }
    fetch(db, query, page).await
}

#[derive(Debug, Clone, Default)]
pub struct CorrectionFilter {
    pub agent_id: Option<i64>,
    pub attendance_id: Option<i64>,
    pub status: Option<CorrectionStatus>,
}

pub async fn list_corrections(
    db: &DatabaseConnection,
    filter: CorrectionFilter,
    page: Page,
) -> Result<Vec<correction::Model>> {
    let mut query = Correction::find().order_by_asc(correction::Column::Id);
    if let Some(agent_id) = filter.agent_id {
        query = query.filter(correction::Column::AgentId.eq(agent_id));
    }
    if let Some(attendance_id) = filter.attendance_id {
        query = query.filter(correction::Column::AttendanceId.eq(attendance_id));
    }
    if let Some(status) = filter.status {
        query = query.filter(correction::Column::CorrectionStatus.eq(status));
    }
    fetch(db, query, page).await
}

#[derive(Debug, Clone, Default)]
pub struct PayrollFilter {
    pub agent_id: Option<i64>,
    pub status: Option<PaymentStatus>,
}

pub async fn list_payrolls(
    db: &DatabaseConnection,
    filter: PayrollFilter,
    page: Page,
) -> Result<Vec<payroll::Model>> {
    let mut query = Payroll::find().order_by_asc(payroll::Column::Id);
    if let Some(agent_id) = filter.agent_id {
        query = query.filter(payroll::Column::AgentId.eq(agent_id));
    }
    if let Some(status) = filter.status {
        query = query.filter(payroll::Column::PaymentStatus.eq(status));
    }
    fetch(db, query, page).await
}
