//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the storage ports. They depend
//! on repository traits, never on sea-orm directly.

mod auth_service;
pub mod container;
mod product_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use product_service::{ProductCatalog, ProductService};
pub use user_service::{UserManager, UserService};
