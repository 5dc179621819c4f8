//! Book catalog service
//!
//! Book create/delete chain into the author book-list bookkeeping. The
//! book mutation is the primary operation; list maintenance is never
//! allowed to fail it.

use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a single book
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Search books
    pub async fn search_books(&self, query: &BookQuery) -> AppResult<(Vec<Book>, i64)> {
        self.repository.books.search(query).await
    }

    /// Create a book and record it on its author's list
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;

        let created = self.repository.books.insert(&book).await?;
        self.connect_author(&created).await;

        Ok(created)
    }

    /// Update a book's descriptive fields
    pub async fn update_book(&self, id: i32, book: UpdateBook) -> AppResult<Book> {
        book.validate()?;
        self.repository.books.update(id, &book).await
    }

    /// Delete a book and drop it from its author's list
    pub async fn delete_book(&self, id: i32) -> AppResult<Book> {
        let deleted = self.repository.books.delete(id).await?;
        self.disconnect_author(&deleted).await;

        Ok(deleted)
    }

    /// Append the book to its author's list. A missing author does not fail
    /// the create; the inconsistency is logged and left for the author
    /// delete advisory to surface.
    async fn connect_author(&self, book: &Book) {
        match self.repository.authors.add_book(book.author_id, book.id).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(
                    book_id = book.id,
                    author_id = book.author_id,
                    "book created with unknown author; book list not updated"
                );
            }
            Err(e) => {
                tracing::warn!(
                    book_id = book.id,
                    author_id = book.author_id,
                    "failed to record book on author list: {e}"
                );
            }
        }
    }

    /// Remove the book from its author's list; absent author or entry is a
    /// no-op
    async fn disconnect_author(&self, book: &Book) {
        if let Err(e) = self
            .repository
            .authors
            .remove_book(book.author_id, book.id)
            .await
        {
            tracing::warn!(
                book_id = book.id,
                author_id = book.author_id,
                "failed to remove book from author list: {e}"
            );
        }
    }
}
