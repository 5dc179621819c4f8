//! Customer endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::customer::{CreateCustomer, Customer, CustomerQuery, UpdateCustomer},
};

use super::{MessageResponse, PaginatedResponse};

/// Create a new customer
#[utoipa::path(
    post,
    path = "/customer",
    tag = "customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_customer(
    State(state): State<crate::AppState>,
    Json(customer): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let created = state.services.customers.create_customer(customer).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a single customer
#[utoipa::path(
    get,
    path = "/customer/{id}",
    tag = "customers",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer details", body = Customer),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.get_customer(id).await?;
    Ok(Json(customer))
}

/// Search customers, or list all when no filters are given
#[utoipa::path(
    get,
    path = "/customer",
    tag = "customers",
    params(CustomerQuery),
    responses(
        (status = 200, description = "Matching customers", body = PaginatedResponse<Customer>)
    )
)]
pub async fn search_customers(
    State(state): State<crate::AppState>,
    Query(query): Query<CustomerQuery>,
) -> AppResult<Json<PaginatedResponse<Customer>>> {
    let (items, total) = state.services.customers.search_customers(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    }))
}

/// Update a customer
#[utoipa::path(
    put,
    path = "/customer/{id}",
    tag = "customers",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(customer): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    let updated = state.services.customers.update_customer(id, customer).await?;
    Ok(Json(updated))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customer/{id}",
    tag = "customers",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 400, description = "Customer still has books checked out", body = crate::error::ErrorResponse),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.customers.delete_customer(id).await?;
    Ok(Json(MessageResponse::success()))
}
