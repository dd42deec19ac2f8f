//! User registration and token handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// User registration request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// User display name
    #[serde(default)]
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[serde(default)]
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Plain password, stored as an Argon2id hash
    #[serde(default)]
    #[schema(example = "123456")]
    pub password: String,
}

/// Token request
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateTokenRequest {
    #[serde(default)]
    #[schema(example = "john@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "123456")]
    pub password: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/generate_token", post(generate_token))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Invalid input or validation error", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> AppResult<StatusCode> {
    state
        .user_service
        .create_user(payload.name, payload.email, payload.password)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/users/generate_token",
    tag = "Users",
    request_body = GenerateTokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Invalid input", body = MessageResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse)
    )
)]
pub async fn generate_token(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<GenerateTokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .generate_token(payload.email, payload.password)
        .await?;

    Ok(Json(token))
}
