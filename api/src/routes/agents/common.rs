use db::models::agent::EmploymentStatus;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAgentRequest {
    #[validate(length(min = 1, message = "employee_code is required"))]
    pub employee_code: String,
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,
    pub national_id: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hourly_rate: Decimal,
    pub employment_status: Option<EmploymentStatus>,
}

/// All fields optional; absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateAgentRequest {
    #[validate(length(min = 1, message = "employee_code must not be empty"))]
    pub employee_code: Option<String>,
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: Option<String>,
    pub national_id: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hourly_rate: Option<Decimal>,
    pub employment_status: Option<EmploymentStatus>,
}
