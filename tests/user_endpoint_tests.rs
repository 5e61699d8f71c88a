//! Registration and login over the HTTP surface
//!
//! Tokens minted by `/v1/login` must be accepted by the home routes.

mod test_fixtures;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use rental_listings::api::create_router;
use rental_listings::application::builder::ApplicationBuilder;
use rental_listings::infrastructure::persistence::{InMemoryHomeStore, InMemoryUserStore};
use rental_listings::infrastructure::storage::InMemoryBlobStore;
use rental_listings::Config;

use test_fixtures::{home_body, register_body, BUCKET, JWT_SECRET};

struct TestApp {
    router: Router,
    users: Arc<InMemoryUserStore>,
}

fn setup_test_app() -> TestApp {
    let mut config = Config::from_env();
    config.jwt_secret = JWT_SECRET.to_string();
    config.photo_bucket = BUCKET.to_string();

    let users = Arc::new(InMemoryUserStore::new());
    let state = ApplicationBuilder::new(config)
        .with_stores(
            Arc::new(InMemoryHomeStore::new()),
            Arc::new(InMemoryBlobStore::new()),
        )
        .with_user_store(users.clone())
        .build()
        .expect("state builds");

    TestApp {
        router: create_router(state),
        users,
    }
}

async fn send(app: &TestApp, method: Method, uri: &str, bearer: Option<&str>, body: Value) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = bearer {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    app.router
        .clone()
        .oneshot(builder.body(Body::from(serde_json::to_vec(&body).unwrap())).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register(app: &TestApp, email: &str, password: &str) -> Response {
    send(app, Method::POST, "/v1/register", None, register_body(email, password)).await
}

async fn login(app: &TestApp, email: &str, password: &str) -> Response {
    send(
        app,
        Method::POST,
        "/v1/login",
        None,
        json!({"email": email, "password": password}),
    )
    .await
}

async fn access_token(app: &TestApp, email: &str, password: &str) -> String {
    let response = login(app, email, password).await;
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn register_creates_account_without_exposing_password() {
    let app = setup_test_app();

    let response = register(&app, "parham@example.com", "123456").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["email"], "parham@example.com");
    assert_eq!(body["name"], "Parham Alvani");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
    assert_eq!(app.users.len(), 1);
}

#[tokio::test]
async fn first_account_is_admin() {
    let app = setup_test_app();

    let first = json_body(register(&app, "first@example.com", "123456").await).await;
    let second = json_body(register(&app, "second@example.com", "123456").await).await;

    assert_eq!(first["admin"], true);
    assert_eq!(second["admin"], false);
}

#[tokio::test]
async fn duplicate_email_is_bad_request() {
    let app = setup_test_app();
    register(&app, "parham@example.com", "123456").await;

    let response = register(&app, "parham@example.com", "abcdef").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "email parham@example.com already exists");
    assert_eq!(app.users.len(), 1);
}

#[tokio::test]
async fn invalid_registration_is_bad_request() {
    let app = setup_test_app();

    let bad_email = register(&app, "parham", "123456").await;
    assert_eq!(bad_email.status(), StatusCode::BAD_REQUEST);

    let short_password = register(&app, "parham@example.com", "123").await;
    assert_eq!(short_password.status(), StatusCode::BAD_REQUEST);

    assert!(app.users.is_empty());
}

#[tokio::test]
async fn login_returns_token_and_account() {
    let app = setup_test_app();
    register(&app, "parham@example.com", "123456").await;

    let response = login(&app, "parham@example.com", "123456").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["email"], "parham@example.com");
    assert_eq!(body["admin"], true);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = setup_test_app();
    register(&app, "parham@example.com", "123456").await;

    let response = login(&app, "parham@example.com", "654321").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["error"], "incorrect password");
}

#[tokio::test]
async fn unknown_email_is_not_found() {
    let app = setup_test_app();

    let response = login(&app, "ghost@example.com", "123456").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn issued_token_owns_created_home() {
    let app = setup_test_app();
    register(&app, "admin@example.com", "123456").await;
    register(&app, "parham@example.com", "123456").await;
    register(&app, "elahe@example.com", "123456").await;

    let owner = access_token(&app, "parham@example.com", "123456").await;
    let created = send(&app, Method::POST, "/v1/homes", Some(&owner), home_body()).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let home = json_body(created).await;
    assert_eq!(home["owner"], "parham@example.com");
    let uri = format!("/v1/homes/{}", home["id"].as_str().unwrap());

    // a plain account cannot edit someone else's listing
    let stranger = access_token(&app, "elahe@example.com", "123456").await;
    let forbidden = send(&app, Method::PUT, &uri, Some(&stranger), home_body()).await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    // the first account registered is an admin
    let admin = access_token(&app, "admin@example.com", "123456").await;
    let allowed = send(&app, Method::PUT, &uri, Some(&admin), home_body()).await;
    assert_eq!(allowed.status(), StatusCode::OK);
}
