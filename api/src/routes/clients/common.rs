use db::models::client::ContractStatus;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, message = "company_name is required"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "contact_name is required"))]
    pub contact_name: String,
    #[validate(email(message = "contact_email must be a valid email address"))]
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contract_status: Option<ContractStatus>,
}

#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, message = "company_name must not be empty"))]
    pub company_name: Option<String>,
    #[validate(length(min = 1, message = "contact_name must not be empty"))]
    pub contact_name: Option<String>,
    #[validate(email(message = "contact_email must be a valid email address"))]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contract_status: Option<ContractStatus>,
}
