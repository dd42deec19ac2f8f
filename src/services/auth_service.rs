//! Authentication service - Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs whose subject is the user's identifier and whose
//! expiry is `now + jwt_expires_in` seconds.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{Config, TOKEN_TYPE_BEARER};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Hash checked when the email is unknown, so that both failure paths
/// pay for one Argon2 verification.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| Password::new("dummy-password-never-matches").ok().map(Password::into_string));

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 300)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and mint a signed token.
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    async fn generate_token(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Sign a token for `user` (shared helper)
fn sign_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = Duration::try_seconds(config.jwt_expires_in)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| {
            AppError::internal(format!(
                "Token lifetime out of range: {}s",
                config.jwt_expires_in
            ))
        })?;

    let claims = Claims {
        sub: user.id.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )
    .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expires_in,
    })
}

/// Concrete implementation of AuthService.
pub struct Authenticator<R: UserRepository + ?Sized> {
    repo: Arc<R>,
    config: Config,
}

impl<R: UserRepository + ?Sized> Authenticator<R> {
    pub fn new(repo: Arc<R>, config: Config) -> Self {
        Self { repo, config }
    }
}

#[async_trait]
impl<R: UserRepository + ?Sized> AuthService for Authenticator<R> {
    async fn generate_token(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user = self.repo.find_by_email(&email).await?;

        let user = match user {
            Some(user) if user.validate_password(&password) => user,
            Some(_) => return Err(AppError::InvalidCredentials),
            None => {
                if let Some(hash) = DUMMY_HASH.as_ref() {
                    Password::from_hash(hash.clone()).verify(&password);
                }
                return Err(AppError::InvalidCredentials);
            }
        };

        sign_token(&user, &self.config)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
