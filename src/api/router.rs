use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::api::handlers::{
    create_home_handler, get_home_handler, health_handler, list_homes_handler, login_handler,
    readiness_handler, register_handler, update_home_handler, ReadinessProbe,
};
use crate::api::middleware::auth_middleware;
use crate::api::openapi::swagger_ui;
use crate::application::ports::ClaimsResolver;
use crate::application::use_cases::{
    CreateHomeUseCase, ListHomesUseCase, LoginUserUseCase, RegisterUserUseCase, UpdateHomeUseCase,
};
use crate::application::HomeRepository;

/// Default cap on request bodies; photos arrive base64 encoded inside JSON
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 16 * 1024 * 1024;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<HomeRepository>,
    pub create_use_case: Arc<CreateHomeUseCase>,
    pub update_use_case: Arc<UpdateHomeUseCase>,
    pub list_use_case: Arc<ListHomesUseCase>,
    pub register_use_case: Arc<RegisterUserUseCase>,
    pub login_use_case: Arc<LoginUserUseCase>,
    pub claims_resolver: Arc<dyn ClaimsResolver>,
    pub readiness: ReadinessProbe,
    pub max_request_bytes: usize,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let homes = Router::new()
        .route(
            "/v1/homes",
            post(create_home_handler).with_state(Arc::clone(&state.create_use_case)),
        )
        .route(
            "/v1/homes",
            get(list_homes_handler).with_state(Arc::clone(&state.list_use_case)),
        )
        .route(
            "/v1/homes/{id}",
            get(get_home_handler).with_state(Arc::clone(&state.repository)),
        )
        .route(
            "/v1/homes/{id}",
            put(update_home_handler).with_state(Arc::clone(&state.update_use_case)),
        )
        // Every home route requires a bearer token
        .route_layer(axum_middleware::from_fn_with_state(
            Arc::clone(&state.claims_resolver),
            auth_middleware,
        ));

    Router::new()
        // Health check (no auth required)
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(state.readiness.clone()),
        )
        // Account routes hand out the tokens the home routes require
        .route(
            "/v1/register",
            post(register_handler).with_state(Arc::clone(&state.register_use_case)),
        )
        .route(
            "/v1/login",
            post(login_handler).with_state(Arc::clone(&state.login_use_case)),
        )
        .merge(homes)
        .merge(swagger_ui())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.max_request_bytes))
        .layer(TraceLayer::new_for_http())
}
