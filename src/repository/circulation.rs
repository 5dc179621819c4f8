//! Checkout/return mutations over books and customers
//!
//! Both operations mutate two rows (a book's available count and a
//! customer's checked-out list). Each runs inside a single transaction and
//! the stock decrement is a conditional update, so concurrent checkouts of
//! the last copy cannot drive `available` negative and the paired mutation
//! cannot half-apply.

use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct CirculationRepository {
    pool: Pool<Postgres>,
}

impl CirculationRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Take one copy of a book for a customer: decrement `available` and
    /// append the book id to the customer's checked-out list.
    ///
    /// Existence is re-validated here even when the availability guard has
    /// already run, since no lock is held between the two steps.
    pub async fn checkout(&self, book_id: i32, customer_id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let decremented = sqlx::query(
            "UPDATE books SET available = available - 1 WHERE id = $1 AND available > 0",
        )
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

        if decremented.rows_affected() == 0 {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                    .bind(book_id)
                    .fetch_one(&mut *tx)
                    .await?;

            return Err(if exists {
                AppError::Conflict("No books available for checkout".to_string())
            } else {
                AppError::NotFound("Book not found".to_string())
            });
        }

        let appended = sqlx::query(
            "UPDATE customers SET checked_out = array_append(checked_out, $2) WHERE id = $1",
        )
        .bind(customer_id)
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

        if appended.rows_affected() == 0 {
            // Dropping the transaction rolls the decrement back
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Give one copy back: remove the first matching entry from the
    /// customer's checked-out list and increment `available`, clamped so it
    /// never exceeds `stock`.
    pub async fn return_book(&self, book_id: i32, customer_id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let book_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await?;

        if !book_exists {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        let mut checked_out: Vec<i32> = sqlx::query_scalar(
            "SELECT checked_out FROM customers WHERE id = $1 FOR UPDATE",
        )
        .bind(customer_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        if !remove_first(&mut checked_out, book_id) {
            return Err(AppError::InvalidState(
                "Book not checked out by this customer".to_string(),
            ));
        }

        sqlx::query("UPDATE customers SET checked_out = $2 WHERE id = $1")
            .bind(customer_id)
            .bind(&checked_out)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE books SET available = LEAST(available + 1, stock) WHERE id = $1")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

/// Remove the first occurrence of `id` from `list`. One entry per held
/// copy, so a single return drops exactly one.
fn remove_first(list: &mut Vec<i32>, id: i32) -> bool {
    match list.iter().position(|&b| b == id) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_first_drops_one_entry() {
        let mut list = vec![3, 5, 3];
        assert!(remove_first(&mut list, 3));
        assert_eq!(list, vec![5, 3]);
    }

    #[test]
    fn remove_first_missing_id_leaves_list_untouched() {
        let mut list = vec![1, 2];
        assert!(!remove_first(&mut list, 9));
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn remove_first_on_empty_list() {
        let mut list = Vec::new();
        assert!(!remove_first(&mut list, 1));
        assert!(list.is_empty());
    }
}
