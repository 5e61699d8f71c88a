use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Extension,
};

use crate::api::errors::ApiError;
use crate::application::dto::{HomeForm, ListResult, NewHomeRequest, PageRequest, UpdateHomeRequest};
use crate::application::use_cases::{CreateHomeUseCase, ListHomesUseCase, UpdateHomeUseCase};
use crate::application::HomeRepository;
use crate::domain::authorization::Claims;
use crate::domain::entities::Home;
use crate::domain::value_objects::HomeId;

/// POST /v1/homes
/// Create a listing owned by the caller
#[utoipa::path(
    post,
    path = "/v1/homes",
    tag = "homes",
    request_body = NewHomeRequest,
    responses(
        (status = 201, description = "Home created", body = Home),
        (status = 400, description = "Invalid request body or photo encoding"),
        (status = 401, description = "Authentication required"),
        (status = 500, description = "Storage failure")
    ),
    security(("bearer" = []))
)]
pub async fn create_home_handler(
    State(use_case): State<Arc<CreateHomeUseCase>>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<NewHomeRequest>,
) -> Result<(StatusCode, Json<Home>), ApiError> {
    let home = use_case.execute(&claims, request).await?;
    Ok((StatusCode::CREATED, Json(home)))
}

/// GET /v1/homes
/// List homes with pagination
#[utoipa::path(
    get,
    path = "/v1/homes",
    tag = "homes",
    params(PageRequest),
    responses(
        (status = 200, description = "Homes retrieved", body = ListResult),
        (status = 401, description = "Authentication required"),
        (status = 500, description = "Storage failure")
    ),
    security(("bearer" = []))
)]
pub async fn list_homes_handler(
    State(use_case): State<Arc<ListHomesUseCase>>,
    Query(page): Query<PageRequest>,
) -> Result<Json<ListResult>, ApiError> {
    let result = use_case.execute(page).await?;
    Ok(Json(result))
}

/// GET /v1/homes/{id}
#[utoipa::path(
    get,
    path = "/v1/homes/{id}",
    tag = "homes",
    params(("id" = String, Path, description = "Home id")),
    responses(
        (status = 200, description = "Home found", body = Home),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Home not found"),
        (status = 500, description = "Storage failure")
    ),
    security(("bearer" = []))
)]
pub async fn get_home_handler(
    State(repository): State<Arc<HomeRepository>>,
    Path(id): Path<HomeId>,
) -> Result<Json<Home>, ApiError> {
    let home = repository.get(&id).await?;
    Ok(Json(home))
}

/// PUT /v1/homes/{id}
/// Replace the editable fields; photos are kept as they are
#[utoipa::path(
    put,
    path = "/v1/homes/{id}",
    tag = "homes",
    params(("id" = String, Path, description = "Home id")),
    request_body = HomeForm,
    responses(
        (status = 200, description = "Home updated", body = Home),
        (status = 400, description = "Invalid request body"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Caller is neither owner nor admin"),
        (status = 404, description = "Home not found"),
        (status = 500, description = "Storage failure")
    ),
    security(("bearer" = []))
)]
pub async fn update_home_handler(
    State(use_case): State<Arc<UpdateHomeUseCase>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<HomeId>,
    Json(request): Json<UpdateHomeRequest>,
) -> Result<Json<Home>, ApiError> {
    let home = use_case.execute(&claims, &id, request).await?;
    Ok(Json(home))
}
