use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::application::dto::RegisterRequest;
use crate::application::errors::UserUseCaseError;
use crate::application::ports::{PasswordHasher, UserStore, UserStoreError};
use crate::domain::entities::User;

/// Use case: Register a new account
pub struct RegisterUserUseCase {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserUseCase {
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn execute(&self, request: RegisterRequest) -> Result<User, UserUseCaseError> {
        request
            .validate()
            .map_err(|e| UserUseCaseError::InvalidRequest(e.to_string()))?;

        let password_hash = self
            .hasher
            .hash(&request.password)
            .map_err(UserUseCaseError::Credentials)?;

        let user = self
            .users
            .insert(&User::new(request.email, request.name, password_hash))
            .await
            .map_err(|e| match e {
                UserStoreError::DuplicateEmail(email) => UserUseCaseError::DuplicateEmail(email),
                other => UserUseCaseError::Store(other),
            })?;

        info!(email = %user.email(), admin = user.is_admin(), "User registered");
        Ok(user)
    }
}
