//! Employee endpoints and login

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::staff::{CreateStaff, Employee, StaffQuery, UpdateStaff},
};

use super::{AuthenticatedStaff, MessageResponse, PaginatedResponse};

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response carrying the authenticated employee and a bearer token
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: Employee,
    pub token: String,
}

/// Log an employee in and issue a token
#[utoipa::path(
    post,
    path = "/employee/login",
    tag = "employees",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Missing username or password", body = crate::error::ErrorResponse),
        (status = 401, description = "Username or password incorrect", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (user, token) = state
        .services
        .staff
        .login(request.username, request.password)
        .await?;

    Ok(Json(LoginResponse { user, token }))
}

/// Register a new employee
#[utoipa::path(
    post,
    path = "/employee",
    tag = "employees",
    request_body = CreateStaff,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid input or username taken", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_employee(
    State(state): State<crate::AppState>,
    Json(staff): Json<CreateStaff>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let created = state.services.staff.create_employee(staff).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a single employee
#[utoipa::path(
    get,
    path = "/employee/{id}",
    tag = "employees",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee details", body = Employee),
        (status = 403, description = "Access forbidden", body = crate::error::ErrorResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_employee(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<Employee>> {
    let employee = state.services.staff.get_employee(id).await?;
    Ok(Json(employee))
}

/// Search employees, or list all when no query is given
#[utoipa::path(
    get,
    path = "/employee",
    tag = "employees",
    security(("bearer_auth" = [])),
    params(StaffQuery),
    responses(
        (status = 200, description = "Matching employees", body = PaginatedResponse<Employee>),
        (status = 403, description = "Access forbidden", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_employees(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<StaffQuery>,
) -> AppResult<Json<PaginatedResponse<Employee>>> {
    let (items, total) = state.services.staff.search_employees(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    }))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/employee/{id}",
    tag = "employees",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    request_body = UpdateStaff,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 403, description = "Access forbidden", body = crate::error::ErrorResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_employee(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(staff): Json<UpdateStaff>,
) -> AppResult<Json<Employee>> {
    let updated = state.services.staff.update_employee(id, staff).await?;
    Ok(Json(updated))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/employee/{id}",
    tag = "employees",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 403, description = "Access forbidden", body = crate::error::ErrorResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_employee(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.staff.delete_employee(id).await?;
    Ok(Json(MessageResponse::success()))
}
