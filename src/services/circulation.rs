//! Book checkout and return workflow
//!
//! A checkout request passes through the availability guard (pure
//! precondition checks, no mutation) before the engine performs the paired
//! book/customer mutation. The engine re-validates existence and stock on
//! its own, so the guard can stay a read-only fast-fail pass.

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{book::Book, customer::Customer},
    repository::Repository,
};

/// Max amount due for a customer before checkout ability is restricted
pub const MAX_BALANCE_DUE: Decimal = Decimal::ONE_HUNDRED;

#[derive(Clone)]
pub struct CirculationService {
    repository: Repository,
}

impl CirculationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check a book out to a customer
    pub async fn check_out(
        &self,
        book: Option<i32>,
        customer: Option<i32>,
    ) -> AppResult<()> {
        let book_id =
            book.ok_or_else(|| AppError::MissingField("No book provided".to_string()))?;
        let customer_id =
            customer.ok_or_else(|| AppError::MissingField("No customer provided".to_string()))?;

        // Availability guard
        let book = self.repository.books.get_by_id(book_id).await?;
        ensure_book_available(&book)?;
        let customer = self.repository.customers.get_by_id(customer_id).await?;
        ensure_good_standing(&customer)?;

        self.repository.circulation.checkout(book_id, customer_id).await?;

        tracing::info!(book_id, customer_id, "book checked out");
        Ok(())
    }

    /// Return a checked-out book
    pub async fn return_book(
        &self,
        book: Option<i32>,
        customer: Option<i32>,
    ) -> AppResult<()> {
        let book_id =
            book.ok_or_else(|| AppError::MissingField("No book provided".to_string()))?;
        let customer_id =
            customer.ok_or_else(|| AppError::MissingField("No customer provided".to_string()))?;

        self.repository
            .circulation
            .return_book(book_id, customer_id)
            .await?;

        tracing::info!(book_id, customer_id, "book returned");
        Ok(())
    }
}

/// Fail with a conflict when no copies are left on the shelf
fn ensure_book_available(book: &Book) -> AppResult<()> {
    if book.available <= 0 {
        return Err(AppError::Conflict(
            "No books available for checkout".to_string(),
        ));
    }
    Ok(())
}

/// Fail when the customer owes at or above the ceiling
fn ensure_good_standing(customer: &Customer) -> AppResult<()> {
    if customer.balance_due >= MAX_BALANCE_DUE {
        return Err(AppError::CreditLimit(format!(
            "Customer not in good standing. ${} currently due on account",
            customer.balance_due
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn book(available: i32, stock: i32) -> Book {
        Book {
            id: 1,
            title: "The Left Hand of Darkness".to_string(),
            author_id: 1,
            stock,
            available,
            fiction: Some(true),
            genre: Some("science fiction".to_string()),
            created_at: Utc::now(),
        }
    }

    fn customer(balance_due: Decimal) -> Customer {
        Customer {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Byron".to_string(),
            phone_number: None,
            email_address: None,
            balance_due,
            checked_out: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn available_book_passes_guard() {
        assert!(ensure_book_available(&book(1, 3)).is_ok());
    }

    #[test]
    fn exhausted_book_conflicts_regardless_of_stock() {
        let err = ensure_book_available(&book(0, 3)).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn customer_under_ceiling_passes_guard() {
        assert!(ensure_good_standing(&customer(Decimal::new(9950, 2))).is_ok());
    }

    #[test]
    fn customer_at_ceiling_is_blocked() {
        let err = ensure_good_standing(&customer(Decimal::ONE_HUNDRED)).unwrap_err();
        assert!(matches!(err, AppError::CreditLimit(_)));
    }

    #[test]
    fn customer_over_ceiling_is_blocked() {
        let err = ensure_good_standing(&customer(Decimal::new(250, 0))).unwrap_err();
        assert!(matches!(err, AppError::CreditLimit(_)));
    }

    #[test]
    fn zero_balance_is_good_standing() {
        assert!(ensure_good_standing(&customer(Decimal::ZERO)).is_ok());
    }
}
