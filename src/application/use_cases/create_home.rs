use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;
use validator::Validate;

use crate::application::dto::{NewHomeRequest, PhotoPayload};
use crate::application::errors::HomeUseCaseError;
use crate::application::HomeRepository;
use crate::domain::authorization::Claims;
use crate::domain::entities::{Home, Photo};

/// Use case: Create a listing owned by the caller
pub struct CreateHomeUseCase {
    repository: Arc<HomeRepository>,
}

impl CreateHomeUseCase {
    pub fn new(repository: Arc<HomeRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        claims: &Claims,
        request: NewHomeRequest,
    ) -> Result<Home, HomeUseCaseError> {
        // 1. Validate
        request
            .validate()
            .map_err(|e| HomeUseCaseError::InvalidRequest(e.to_string()))?;

        // 2. Decode photos before touching storage
        let photos = decode_photos(&request.photos)?;
        let details = request.home.into_details()?;

        // 3. Persist; the caller becomes the owner
        let mut home = Home::new(claims.subject.clone(), details);
        self.repository.set(&mut home, &photos).await?;

        Ok(home)
    }
}

/// Entries with an empty name or empty content are skipped
fn decode_photos(payloads: &[PhotoPayload]) -> Result<Vec<Photo>, HomeUseCaseError> {
    let mut photos = Vec::with_capacity(payloads.len());

    for payload in payloads {
        if payload.name.is_empty() || payload.content.is_empty() {
            debug!(name = %payload.name, "Skipping empty photo entry");
            continue;
        }

        let content = STANDARD.decode(payload.content.as_bytes()).map_err(|e| {
            HomeUseCaseError::InvalidRequest(format!(
                "photo {} is not valid base64: {}",
                payload.name, e
            ))
        })?;
        photos.push(Photo::new(payload.name.clone(), content));
    }

    Ok(photos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::test_support::sample_form;
    use crate::application::errors::HomeRepositoryError;
    use crate::application::use_cases::test_support::harness;
    use crate::application::DEFAULT_PHOTO_BUCKET;
    use crate::domain::value_objects::PhotoKey;

    const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

    fn request(photos: Vec<PhotoPayload>) -> NewHomeRequest {
        NewHomeRequest {
            home: sample_form(),
            photos,
        }
    }

    fn payload(name: &str, content: &[u8]) -> PhotoPayload {
        PhotoPayload {
            name: name.to_string(),
            content: STANDARD.encode(content),
        }
    }

    #[tokio::test]
    async fn test_create_home_with_photos() {
        // Arrange
        let h = harness();
        let use_case = CreateHomeUseCase::new(h.repository.clone());
        let claims = Claims::new("owner@example.com", false);

        // Act
        let home = use_case
            .execute(&claims, request(vec![payload("a.png", PNG_HEADER)]))
            .await
            .unwrap();

        // Assert
        let id = home.id().unwrap();
        assert_eq!(home.owner(), "owner@example.com");
        assert_eq!(home.photos().get("a.png"), Some(&PhotoKey::derive(id, "a.png")));

        let stored = h
            .blobs
            .object(DEFAULT_PHOTO_BUCKET, PhotoKey::derive(id, "a.png").as_str())
            .unwrap();
        assert_eq!(stored.content_type, "image/png");
        assert_eq!(h.documents.len(), 1);
    }

    #[tokio::test]
    async fn test_create_home_skips_empty_photo_entries() {
        let h = harness();
        let use_case = CreateHomeUseCase::new(h.repository.clone());
        let claims = Claims::new("owner@example.com", false);

        let photos = vec![
            payload("", b"123"),
            PhotoPayload {
                name: "empty.png".to_string(),
                content: String::new(),
            },
            payload("kept.jpg", b"456"),
        ];
        let home = use_case.execute(&claims, request(photos)).await.unwrap();

        assert_eq!(home.photos().len(), 1);
        assert!(home.photos().contains_key("kept.jpg"));
    }

    #[tokio::test]
    async fn test_create_home_bad_base64_stores_nothing() {
        let h = harness();
        let use_case = CreateHomeUseCase::new(h.repository.clone());
        let claims = Claims::new("owner@example.com", false);

        let photos = vec![PhotoPayload {
            name: "a.png".to_string(),
            content: "not base64!!".to_string(),
        }];
        let err = use_case.execute(&claims, request(photos)).await.unwrap_err();

        assert!(matches!(err, HomeUseCaseError::InvalidRequest(_)));
        assert!(h.documents.is_empty());
        assert_eq!(h.blobs.object_count(DEFAULT_PHOTO_BUCKET), 0);
    }

    #[tokio::test]
    async fn test_create_home_rejects_invalid_form() {
        let h = harness();
        let use_case = CreateHomeUseCase::new(h.repository.clone());
        let claims = Claims::new("owner@example.com", false);

        let mut req = request(vec![]);
        req.home.rooms = 0;
        let err = use_case.execute(&claims, req).await.unwrap_err();

        assert!(matches!(err, HomeUseCaseError::InvalidRequest(_)));
        assert!(h.documents.is_empty());
    }

    #[tokio::test]
    async fn test_created_home_can_be_read_back() {
        let h = harness();
        let use_case = CreateHomeUseCase::new(h.repository.clone());
        let claims = Claims::new("owner@example.com", false);

        let home = use_case.execute(&claims, request(vec![])).await.unwrap();
        let fetched = h.repository.get(home.id().unwrap()).await.unwrap();
        assert_eq!(fetched, home);

        let mut again = fetched;
        let err = h.repository.set(&mut again, &[]).await.unwrap_err();
        assert!(matches!(err, HomeRepositoryError::IdNotEmpty));
    }
}
