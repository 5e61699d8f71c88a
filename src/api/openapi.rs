use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::application::dto::{
    HomeForm, ListResult, LoginRequest, LoginResponse, NewHomeRequest, PhotoPayload,
    RegisterRequest,
};
use crate::domain::entities::{Home, HomeDetails, User};
use crate::domain::value_objects::Bed;

/// OpenAPI specification for the rental listings API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rental Listings API",
        version = "1.0.0",
        description = "Rental home listings with photo storage"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::homes::create_home_handler,
        crate::api::handlers::homes::list_homes_handler,
        crate::api::handlers::homes::get_home_handler,
        crate::api::handlers::homes::update_home_handler,
        crate::api::handlers::users::register_handler,
        crate::api::handlers::users::login_handler,
    ),
    components(
        schemas(
            Home,
            HomeDetails,
            Bed,
            HomeForm,
            NewHomeRequest,
            PhotoPayload,
            ListResult,
            User,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "homes", description = "Rental listing operations"),
        (name = "users", description = "Registration and login")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_home_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/v1/homes"));
        assert!(doc.paths.paths.contains_key("/v1/homes/{id}"));
        assert!(doc.paths.paths.contains_key("/health/ready"));
        assert!(doc.paths.paths.contains_key("/v1/register"));
        assert!(doc.paths.paths.contains_key("/v1/login"));
    }

    #[test]
    fn test_openapi_declares_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer"));
    }
}
