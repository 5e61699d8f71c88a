use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::application::dto::{LoginRequest, LoginResponse};
use crate::application::errors::UserUseCaseError;
use crate::application::ports::{PasswordHasher, TokenIssuer, UserStore};

/// Use case: Exchange credentials for an access token
pub struct LoginUserUseCase {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl LoginUserUseCase {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, UserUseCaseError> {
        request
            .validate()
            .map_err(|e| UserUseCaseError::InvalidRequest(e.to_string()))?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| UserUseCaseError::EmailNotFound(request.email.clone()))?;

        if !self.hasher.verify(&request.password, user.password_hash()) {
            debug!(email = %request.email, "Login rejected");
            return Err(UserUseCaseError::IncorrectPassword);
        }

        let access_token = self
            .tokens
            .issue(&user)
            .map_err(UserUseCaseError::Credentials)?;

        info!(email = %user.email(), "User logged in");
        Ok(LoginResponse { access_token, user })
    }
}
