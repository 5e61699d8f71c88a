use std::sync::Arc;

use crate::application::dto::{ListResult, PageRequest};
use crate::application::errors::HomeUseCaseError;
use crate::application::HomeRepository;

/// Use case: List homes
pub struct ListHomesUseCase {
    repository: Arc<HomeRepository>,
}

impl ListHomesUseCase {
    pub fn new(repository: Arc<HomeRepository>) -> Self {
        Self { repository }
    }

    /// Execute list with pagination
    pub async fn execute(&self, page: PageRequest) -> Result<ListResult, HomeUseCaseError> {
        let (skip, limit) = page.normalize();
        Ok(self.repository.list(skip, limit).await?)
    }
}
