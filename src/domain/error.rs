//! Domain error types.
//!
//! These carry no HTTP knowledge; `AppError` maps them to responses.

use thiserror::Error;

/// Entity invariant violations. Always caused by user input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,

    #[error("price is required")]
    PriceRequired,

    #[error("invalid price")]
    InvalidPrice,

    #[error("email is required")]
    EmailRequired,

    #[error("password is required")]
    PasswordRequired,
}

/// Text that does not parse as an [`EntityId`](super::EntityId).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed identifier: {input}")]
pub struct MalformedIdentifier {
    input: String,
}

impl MalformedIdentifier {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected text.
    pub fn input(&self) -> &str {
        &self.input
    }
}
