use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message-only response, also the body of every error
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable description
    #[schema(example = "name is required")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
