//! User domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::ValidationError;
use super::id::EntityId;
use super::password::Password;
use crate::errors::AppResult;

/// User domain entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user, hashing the password immediately.
    ///
    /// Fields are checked in order name, email, password. Email uniqueness
    /// is left to the storage layer.
    pub fn create(name: impl Into<String>, email: impl Into<String>, password: &str) -> AppResult<Self> {
        let name = name.into();
        let email = email.into();

        if name.is_empty() {
            return Err(ValidationError::NameRequired.into());
        }
        if email.is_empty() {
            return Err(ValidationError::EmailRequired.into());
        }
        let password_hash = Password::new(password)?.into_string();

        Ok(Self {
            id: EntityId::generate(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        })
    }

    /// Check a candidate plaintext against the stored hash.
    pub fn validate_password(&self, candidate: &str) -> bool {
        Password::from_hash(self.password_hash.clone()).verify(candidate)
    }
}
