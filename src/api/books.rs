//! Book endpoints, including the checkout/return workflow

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
};

use super::{MessageResponse, PaginatedResponse};

/// Checkout/return request naming the book and customer involved
#[derive(Deserialize, ToSchema)]
pub struct CirculationRequest {
    /// Book id
    pub book: Option<i32>,
    /// Customer id
    pub customer: Option<i32>,
}

/// Check a book out to a customer
#[utoipa::path(
    post,
    path = "/book/checkout",
    tag = "books",
    request_body = CirculationRequest,
    responses(
        (status = 200, description = "Book checked out", body = MessageResponse),
        (status = 400, description = "Missing field, no copies available, or customer over the balance ceiling", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn check_out_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CirculationRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .circulation
        .check_out(request.book, request.customer)
        .await?;

    Ok(Json(MessageResponse::success()))
}

/// Return a checked-out book
#[utoipa::path(
    post,
    path = "/book/return",
    tag = "books",
    request_body = CirculationRequest,
    responses(
        (status = 200, description = "Book returned", body = MessageResponse),
        (status = 400, description = "Missing field or book not checked out by this customer", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CirculationRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .circulation
        .return_book(request.book, request.customer)
        .await?;

    Ok(Json(MessageResponse::success()))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/book",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.books.create_book(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a single book
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_book(id).await?;
    Ok(Json(book))
}

/// Search books, or list all when no filters are given
#[utoipa::path(
    get,
    path = "/book",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books", body = PaginatedResponse<Book>)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<PaginatedResponse<Book>>> {
    let (items, total) = state.services.books.search_books(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    }))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(book): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let updated = state.services.books.update_book(id, book).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete_book(id).await?;
    Ok(Json(MessageResponse::success()))
}
