use db::models::site::SiteStatus;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSiteRequest {
    pub client_id: i64,
    #[validate(length(min = 1, message = "site_name is required"))]
    pub site_name: String,
    pub site_code: Option<String>,
    pub address: Option<String>,
    #[validate(range(min = 1, message = "required_agents must be at least 1"))]
    pub required_agents: Option<i32>,
    pub site_status: Option<SiteStatus>,
}

#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateSiteRequest {
    #[validate(length(min = 1, message = "site_name must not be empty"))]
    pub site_name: Option<String>,
    pub site_code: Option<String>,
    pub address: Option<String>,
    #[validate(range(min = 1, message = "required_agents must be at least 1"))]
    pub required_agents: Option<i32>,
    pub site_status: Option<SiteStatus>,
}
