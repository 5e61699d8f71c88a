use std::sync::Arc;

use tracing::warn;
use validator::Validate;

use crate::application::dto::UpdateHomeRequest;
use crate::application::errors::HomeUseCaseError;
use crate::application::HomeRepository;
use crate::domain::authorization::Claims;
use crate::domain::entities::Home;
use crate::domain::value_objects::HomeId;

/// Use case: Edit a listing's details, restricted to its owner or an admin
pub struct UpdateHomeUseCase {
    repository: Arc<HomeRepository>,
}

impl UpdateHomeUseCase {
    pub fn new(repository: Arc<HomeRepository>) -> Self {
        Self { repository }
    }

    /// Returns the home as it reads after the update
    pub async fn execute(
        &self,
        claims: &Claims,
        id: &HomeId,
        request: UpdateHomeRequest,
    ) -> Result<Home, HomeUseCaseError> {
        // 1. Load and authorize
        let mut home = self.repository.get(id).await?;
        if !claims.can_modify(&home) {
            warn!(home_id = %id, subject = %claims.subject, "Update rejected for non-owner");
            return Err(HomeUseCaseError::Forbidden(format!(
                "only the owner or an admin may update home {}",
                id
            )));
        }

        // 2. Validate
        request
            .validate()
            .map_err(|e| HomeUseCaseError::InvalidRequest(e.to_string()))?;
        let details = request.into_details()?;

        // 3. Write; the home may have been removed since it was read
        self.repository.update(id, &details).await?;

        home.apply_details(details);
        Ok(home)
    }
}
