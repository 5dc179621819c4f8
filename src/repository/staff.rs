//! Employees and managers repositories
//!
//! The two collections share a shape; each gets its own repository over its
//! own table so route handlers stay explicit about which staff kind they
//! touch.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::staff::{CreateStaff, Employee, Manager, StaffQuery, UpdateStaff},
};

macro_rules! staff_repository {
    ($name:ident, $model:ty, $table:literal, $label:literal) => {
        #[derive(Clone)]
        pub struct $name {
            pool: Pool<Postgres>,
        }

        impl $name {
            pub fn new(pool: Pool<Postgres>) -> Self {
                Self { pool }
            }

            pub async fn get_by_id(&self, id: i32) -> AppResult<$model> {
                sqlx::query_as::<_, $model>(concat!(
                    "SELECT * FROM ",
                    $table,
                    " WHERE id = $1"
                ))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| AppError::NotFound(concat!($label, " not found").to_string()))
            }

            pub async fn get_by_username(&self, username: &str) -> AppResult<Option<$model>> {
                let found = sqlx::query_as::<_, $model>(concat!(
                    "SELECT * FROM ",
                    $table,
                    " WHERE LOWER(username) = LOWER($1)"
                ))
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;

                Ok(found)
            }

            pub async fn username_exists(&self, username: &str) -> AppResult<bool> {
                let exists: bool = sqlx::query_scalar(concat!(
                    "SELECT EXISTS(SELECT 1 FROM ",
                    $table,
                    " WHERE LOWER(username) = LOWER($1))"
                ))
                .bind(username)
                .fetch_one(&self.pool)
                .await?;

                Ok(exists)
            }

            pub async fn search(&self, query: &StaffQuery) -> AppResult<(Vec<$model>, i64)> {
                let page = query.page.unwrap_or(1).max(1);
                let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
                let offset = (page - 1) * per_page;

                let total: i64 = sqlx::query_scalar(concat!(
                    "SELECT COUNT(*) FROM ",
                    $table,
                    " WHERE ($1::text IS NULL",
                    " OR username ILIKE '%' || $1 || '%'",
                    " OR first_name ILIKE '%' || $1 || '%'",
                    " OR last_name ILIKE '%' || $1 || '%')"
                ))
                .bind(&query.name)
                .fetch_one(&self.pool)
                .await?;

                let found = sqlx::query_as::<_, $model>(concat!(
                    "SELECT * FROM ",
                    $table,
                    " WHERE ($1::text IS NULL",
                    " OR username ILIKE '%' || $1 || '%'",
                    " OR first_name ILIKE '%' || $1 || '%'",
                    " OR last_name ILIKE '%' || $1 || '%')",
                    " ORDER BY username LIMIT $2 OFFSET $3"
                ))
                .bind(&query.name)
                .bind(per_page)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                Ok((found, total))
            }

            /// Insert with an already-hashed password
            pub async fn insert(
                &self,
                staff: &CreateStaff,
                password_hash: &str,
            ) -> AppResult<$model> {
                let created = sqlx::query_as::<_, $model>(concat!(
                    "INSERT INTO ",
                    $table,
                    " (username, password, first_name, last_name)",
                    " VALUES ($1, $2, $3, $4) RETURNING *"
                ))
                .bind(&staff.username)
                .bind(password_hash)
                .bind(&staff.first_name)
                .bind(&staff.last_name)
                .fetch_one(&self.pool)
                .await?;

                Ok(created)
            }

            /// Update; `password_hash` is the already-hashed replacement, if any
            pub async fn update(
                &self,
                id: i32,
                staff: &UpdateStaff,
                password_hash: Option<&str>,
            ) -> AppResult<$model> {
                sqlx::query_as::<_, $model>(concat!(
                    "UPDATE ",
                    $table,
                    " SET username = COALESCE($2, username),",
                    " password = COALESCE($3, password),",
                    " first_name = COALESCE($4, first_name),",
                    " last_name = COALESCE($5, last_name)",
                    " WHERE id = $1 RETURNING *"
                ))
                .bind(id)
                .bind(&staff.username)
                .bind(password_hash)
                .bind(&staff.first_name)
                .bind(&staff.last_name)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| AppError::NotFound(concat!($label, " not found").to_string()))
            }

            pub async fn delete(&self, id: i32) -> AppResult<()> {
                let result = sqlx::query(concat!("DELETE FROM ", $table, " WHERE id = $1"))
                    .bind(id)
                    .execute(&self.pool)
                    .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound(concat!($label, " not found").to_string()));
                }

                Ok(())
            }
        }
    };
}

staff_repository!(EmployeesRepository, Employee, "employees", "Employee");
staff_repository!(ManagersRepository, Manager, "managers", "Manager");
