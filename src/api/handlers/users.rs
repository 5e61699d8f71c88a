use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::api::errors::ApiError;
use crate::application::dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::application::use_cases::{LoginUserUseCase, RegisterUserUseCase};
use crate::domain::entities::User;

/// POST /v1/register
#[utoipa::path(
    post,
    path = "/v1/register",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = User),
        (status = 400, description = "Invalid request or email already exists"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn register_handler(
    State(use_case): State<Arc<RegisterUserUseCase>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = use_case.execute(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /v1/login
/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/v1/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Incorrect password"),
        (status = 404, description = "Unknown email")
    )
)]
pub async fn login_handler(
    State(use_case): State<Arc<LoginUserUseCase>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let response = use_case.execute(request).await?;
    Ok(Json(response))
}
