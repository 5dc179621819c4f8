//! Author management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::author::{Author, AuthorQuery, CreateAuthor, UpdateAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a single author
    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await
    }

    /// Search authors by name
    pub async fn search_authors(&self, query: &AuthorQuery) -> AppResult<(Vec<Author>, i64)> {
        self.repository.authors.search(query).await
    }

    /// Create an author
    pub async fn create_author(&self, author: CreateAuthor) -> AppResult<Author> {
        author.validate()?;
        self.repository.authors.insert(&author).await
    }

    /// Update an author's name
    pub async fn update_author(&self, id: i32, author: UpdateAuthor) -> AppResult<Author> {
        author.validate()?;
        self.repository.authors.update(id, &author).await
    }

    /// Delete an author. The returned row carries any book ids still
    /// referencing the author; the handler reports them as an advisory
    /// rather than blocking or cascading the delete.
    pub async fn delete_author(&self, id: i32) -> AppResult<Author> {
        let deleted = self.repository.authors.delete(id).await?;

        if !deleted.books.is_empty() {
            tracing::warn!(
                author_id = id,
                orphaned = deleted.books.len(),
                "author deleted with books still referencing it"
            );
        }

        Ok(deleted)
    }
}
