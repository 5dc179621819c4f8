//! Author endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::author::{Author, AuthorQuery, CreateAuthor, UpdateAuthor},
};

use super::PaginatedResponse;

/// Delete-author response; carries the ids of books still referencing the
/// author when the list was not empty
#[derive(Serialize, ToSchema)]
pub struct DeleteAuthorResponse {
    pub message: String,
    #[serde(rename = "bookList", skip_serializing_if = "Option::is_none")]
    pub book_list: Option<Vec<i32>>,
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/author",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_author(
    State(state): State<crate::AppState>,
    Json(author): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let created = state.services.authors.create_author(author).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a single author
#[utoipa::path(
    get,
    path = "/author/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.get_author(id).await?;
    Ok(Json(author))
}

/// Search authors by name, or list all when no query is given
#[utoipa::path(
    get,
    path = "/author",
    tag = "authors",
    params(AuthorQuery),
    responses(
        (status = 200, description = "Matching authors", body = PaginatedResponse<Author>)
    )
)]
pub async fn search_authors(
    State(state): State<crate::AppState>,
    Query(query): Query<AuthorQuery>,
) -> AppResult<Json<PaginatedResponse<Author>>> {
    let (items, total) = state.services.authors.search_authors(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    }))
}

/// Update an author
#[utoipa::path(
    put,
    path = "/author/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(author): Json<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    let updated = state.services.authors.update_author(id, author).await?;
    Ok(Json(updated))
}

/// Delete an author
///
/// Responds 202 with the orphaned book ids when the author's book list was
/// not empty; the delete itself still goes through.
#[utoipa::path(
    delete,
    path = "/author/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author deleted, no books referenced it", body = DeleteAuthorResponse),
        (status = 202, description = "Author deleted, some books still reference it", body = DeleteAuthorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<(StatusCode, Json<DeleteAuthorResponse>)> {
    let deleted = state.services.authors.delete_author(id).await?;

    if deleted.books.is_empty() {
        return Ok((
            StatusCode::OK,
            Json(DeleteAuthorResponse {
                message: "Success".to_string(),
                book_list: None,
            }),
        ));
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(DeleteAuthorResponse {
            message: "Success. The following books reference this author and need attention."
                .to_string(),
            book_list: Some(deleted.books),
        }),
    ))
}
