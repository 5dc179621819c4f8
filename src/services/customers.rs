//! Customer management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::customer::{CreateCustomer, Customer, CustomerQuery, UpdateCustomer},
    repository::Repository,
};

#[derive(Clone)]
pub struct CustomersService {
    repository: Repository,
}

impl CustomersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a single customer
    pub async fn get_customer(&self, id: i32) -> AppResult<Customer> {
        self.repository.customers.get_by_id(id).await
    }

    /// Search customers
    pub async fn search_customers(
        &self,
        query: &CustomerQuery,
    ) -> AppResult<(Vec<Customer>, i64)> {
        self.repository.customers.search(query).await
    }

    /// Create a customer
    pub async fn create_customer(&self, customer: CreateCustomer) -> AppResult<Customer> {
        customer.validate()?;
        self.repository.customers.insert(&customer).await
    }

    /// Update a customer
    pub async fn update_customer(
        &self,
        id: i32,
        customer: UpdateCustomer,
    ) -> AppResult<Customer> {
        customer.validate()?;
        self.repository.customers.update(id, &customer).await
    }

    /// Delete a customer; refused while books are still out
    pub async fn delete_customer(&self, id: i32) -> AppResult<Customer> {
        let customer = self.repository.customers.get_by_id(id).await?;

        if !customer.checked_out.is_empty() {
            return Err(AppError::InvalidState(
                "Customer still has books checked out".to_string(),
            ));
        }

        self.repository.customers.delete(id).await
    }
}
