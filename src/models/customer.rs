//! Customer model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Full customer model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
    /// Amount owed; checkout is blocked at or above the ceiling
    #[schema(value_type = f64)]
    pub balance_due: Decimal,
    /// Ids of books currently held, one entry per unreturned copy
    pub checked_out: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

/// Create customer request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCustomer {
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: String,
    pub phone_number: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email_address: Option<String>,
    /// Opening balance; defaults to 0
    #[schema(value_type = Option<f64>)]
    pub balance_due: Option<Decimal>,
}

/// Update customer request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomer {
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email_address: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub balance_due: Option<Decimal>,
}

/// Customer search parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct CustomerQuery {
    /// Match against first or last name
    pub name: Option<String>,
    /// Match by email address
    pub email: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
