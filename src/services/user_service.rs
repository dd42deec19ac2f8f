//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{EntityId, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user, hashing the password
    async fn create_user(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: EntityId) -> AppResult<User>;
}

/// Concrete implementation of UserService.
pub struct UserManager<R: UserRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository + ?Sized> UserService for UserManager<R> {
    async fn create_user(&self, name: String, email: String, password: String) -> AppResult<User> {
        let user = User::create(name, email, &password)?;
        self.repo.create(&user).await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn get_user(&self, id: EntityId) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }
}
