//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    /// Id of the author who wrote this book
    pub author_id: i32,
    /// Total copies held
    pub stock: i32,
    /// Copies currently eligible for checkout (0 <= available <= stock)
    pub available: i32,
    pub fiction: Option<bool>,
    pub genre: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    /// Id of the author who wrote this book
    pub author: i32,
    /// Total copies held; new books start fully available
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,
    pub fiction: Option<bool>,
    pub genre: Option<String>,
}

/// Update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,
    pub fiction: Option<bool>,
    pub genre: Option<String>,
}

/// Book search parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookQuery {
    /// Search in title
    pub title: Option<String>,
    /// Filter by genre
    pub genre: Option<String>,
    /// Filter by author id
    pub author: Option<i32>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
