//! Domain layer - Core business entities and logic
//!
//! Entities, value objects and their invariants, independent of
//! persistence and HTTP concerns.

pub mod error;
pub mod id;
pub mod password;
pub mod product;
pub mod user;

pub use error::{MalformedIdentifier, ValidationError};
pub use id::EntityId;
pub use password::Password;
pub use product::{Product, ProductResponse};
pub use user::User;
