pub mod auth;

pub use auth::{auth_middleware, JwtClaimsResolver, JwtTokenIssuer, TokenClaims, DEFAULT_TOKEN_TTL_SECS};
