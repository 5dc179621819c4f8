//! Customers repository for database operations

use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::customer::{CreateCustomer, Customer, CustomerQuery, UpdateCustomer},
};

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Postgres>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get customer by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }

    /// Search customers by name or email with pagination
    pub async fn search(&self, query: &CustomerQuery) -> AppResult<(Vec<Customer>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM customers
            WHERE ($1::text IS NULL
               OR first_name ILIKE '%' || $1 || '%'
               OR last_name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR LOWER(email_address) = LOWER($2))
            "#,
        )
        .bind(&query.name)
        .bind(&query.email)
        .fetch_one(&self.pool)
        .await?;

        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT * FROM customers
            WHERE ($1::text IS NULL
               OR first_name ILIKE '%' || $1 || '%'
               OR last_name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR LOWER(email_address) = LOWER($2))
            ORDER BY last_name, first_name
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&query.name)
        .bind(&query.email)
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((customers, total))
    }

    /// Insert a new customer with an empty checked-out list
    pub async fn insert(&self, customer: &CreateCustomer) -> AppResult<Customer> {
        let balance = customer.balance_due.unwrap_or(Decimal::ZERO);

        let created = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (first_name, last_name, phone_number, email_address, balance_due)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.phone_number)
        .bind(&customer.email_address)
        .bind(balance)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update a customer's contact and balance fields
    pub async fn update(&self, id: i32, customer: &UpdateCustomer) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                phone_number = COALESCE($4, phone_number),
                email_address = COALESCE($5, email_address),
                balance_due = COALESCE($6, balance_due)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.phone_number)
        .bind(&customer.email_address)
        .bind(customer.balance_due)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }

    /// Delete a customer
    pub async fn delete(&self, id: i32) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>("DELETE FROM customers WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }
}
