//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::sync::Arc;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

use rental_listings::api::middleware::TokenClaims;
use rental_listings::application::HomeRepository;
use rental_listings::domain::entities::HomeDetails;
use rental_listings::domain::value_objects::Bed;
use rental_listings::infrastructure::{
    identity::ObjectIdGenerator, persistence::InMemoryHomeStore, storage::InMemoryBlobStore,
};

pub const JWT_SECRET: &str = "integration-test-secret";
pub const BUCKET: &str = "photos";

/// Minimal PNG signature, enough for content sniffing
pub const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

pub struct InMemoryEnvironment {
    pub repository: Arc<HomeRepository>,
    pub documents: Arc<InMemoryHomeStore>,
    pub blobs: Arc<InMemoryBlobStore>,
}

impl InMemoryEnvironment {
    pub fn new() -> Self {
        let documents = Arc::new(InMemoryHomeStore::new());
        let blobs = Arc::new(InMemoryBlobStore::new());
        let repository = Arc::new(HomeRepository::new(
            documents.clone(),
            blobs.clone(),
            Arc::new(ObjectIdGenerator::new()),
            BUCKET,
        ));

        Self {
            repository,
            documents,
            blobs,
        }
    }
}

pub fn sample_details() -> HomeDetails {
    HomeDetails {
        title: "Sunny flat".to_string(),
        location: "Iran, Tehran".to_string(),
        description: "Home Sweet Home".to_string(),
        peoples: 4,
        room: "room_type".to_string(),
        bed: Bed::Double,
        rooms: 2,
        bathrooms: 2,
        smoking: false,
        guest: false,
        pet: false,
        bills_included: true,
        contract: "contract_type".to_string(),
        security_deposit: 1_000,
        price: 500,
    }
}

/// Request body accepted by `POST /v1/homes` and `PUT /v1/homes/{id}`
pub fn home_body() -> serde_json::Value {
    json!({
        "title": "Sunny flat",
        "location": "Iran, Tehran",
        "description": "Home Sweet Home",
        "peoples": 4,
        "room": "room_type",
        "bed": "double",
        "rooms": 2,
        "bathrooms": 2,
        "smoking": false,
        "guest": false,
        "pet": false,
        "bills_included": true,
        "contract": "contract_type",
        "security_deposit": 1000,
        "price": 500
    })
}

pub fn token(subject: &str, admin: bool) -> String {
    let claims = TokenClaims {
        sub: subject.to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        admin,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("token encodes")
}

/// Registration body for `POST /v1/register`
pub fn register_body(email: &str, password: &str) -> serde_json::Value {
    json!({
        "name": "Parham Alvani",
        "email": email,
        "password": password
    })
}
