//! Manager endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::staff::{CreateStaff, Manager, StaffQuery, UpdateStaff},
};

use super::{AuthenticatedStaff, MessageResponse, PaginatedResponse};

/// Create a new manager
#[utoipa::path(
    post,
    path = "/manager",
    tag = "managers",
    security(("bearer_auth" = [])),
    request_body = CreateStaff,
    responses(
        (status = 201, description = "Manager created", body = Manager),
        (status = 400, description = "Invalid input or username taken", body = crate::error::ErrorResponse),
        (status = 403, description = "Access forbidden", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_manager(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(staff): Json<CreateStaff>,
) -> AppResult<(StatusCode, Json<Manager>)> {
    let created = state.services.staff.create_manager(staff).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a single manager
#[utoipa::path(
    get,
    path = "/manager/{id}",
    tag = "managers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Manager ID")
    ),
    responses(
        (status = 200, description = "Manager details", body = Manager),
        (status = 403, description = "Access forbidden", body = crate::error::ErrorResponse),
        (status = 404, description = "Manager not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_manager(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<Manager>> {
    let manager = state.services.staff.get_manager(id).await?;
    Ok(Json(manager))
}

/// Search managers, or list all when no query is given
#[utoipa::path(
    get,
    path = "/manager",
    tag = "managers",
    security(("bearer_auth" = [])),
    params(StaffQuery),
    responses(
        (status = 200, description = "Matching managers", body = PaginatedResponse<Manager>),
        (status = 403, description = "Access forbidden", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_managers(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<StaffQuery>,
) -> AppResult<Json<PaginatedResponse<Manager>>> {
    let (items, total) = state.services.staff.search_managers(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    }))
}

/// Update a manager
#[utoipa::path(
    put,
    path = "/manager/{id}",
    tag = "managers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Manager ID")
    ),
    request_body = UpdateStaff,
    responses(
        (status = 200, description = "Manager updated", body = Manager),
        (status = 403, description = "Access forbidden", body = crate::error::ErrorResponse),
        (status = 404, description = "Manager not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_manager(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(staff): Json<UpdateStaff>,
) -> AppResult<Json<Manager>> {
    let updated = state.services.staff.update_manager(id, staff).await?;
    Ok(Json(updated))
}

/// Delete a manager
#[utoipa::path(
    delete,
    path = "/manager/{id}",
    tag = "managers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Manager ID")
    ),
    responses(
        (status = 200, description = "Manager deleted", body = MessageResponse),
        (status = 403, description = "Access forbidden", body = crate::error::ErrorResponse),
        (status = 404, description = "Manager not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_manager(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.staff.delete_manager(id).await?;
    Ok(Json(MessageResponse::success()))
}
