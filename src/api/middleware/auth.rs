use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::errors::ApiError;
use crate::application::ports::{ClaimsResolver, TokenIssuer};
use crate::domain::authorization::{AuthorizationError, Claims};
use crate::domain::entities::User;

/// Lifetime of issued access tokens unless configured otherwise
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Registered claims carried by access tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub admin: bool,
}

/// Resolves HS256 bearer tokens signed with a shared secret
pub struct JwtClaimsResolver {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtClaimsResolver {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl ClaimsResolver for JwtClaimsResolver {
    fn resolve(&self, token: &str) -> Result<Claims, AuthorizationError> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthorizationError::InvalidToken(e.to_string()))?;

        if token_data.claims.sub.is_empty() {
            return Err(AuthorizationError::InvalidToken(
                "token has no subject".to_string(),
            ));
        }

        Ok(Claims::new(token_data.claims.sub, token_data.claims.admin))
    }
}

/// Signs HS256 access tokens whose subject is the account email
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    ttl_secs: u64,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User) -> Result<String, String> {
        let expires_at = chrono::Utc::now().timestamp().max(0) as u64 + self.ttl_secs;
        let claims = TokenClaims {
            sub: user.email().to_string(),
            exp: expires_at as usize,
            admin: user.is_admin(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| format!("failed to sign a token: {e}"))
    }
}

/// Authenticate the bearer token and expose its `Claims` to handlers
pub async fn auth_middleware(
    State(resolver): State<Arc<dyn ClaimsResolver>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AuthorizationError::AuthenticationRequired("missing bearer token".to_string())
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AuthorizationError::AuthenticationRequired("expected a bearer token".to_string())
    })?;

    let claims = resolver.resolve(token).inspect_err(|e| {
        debug!(error = %e, "Rejected bearer token");
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
