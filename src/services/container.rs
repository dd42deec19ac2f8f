//! Service Container - Centralized service access.
//!
//! Owns one instance of every service behind its trait object so the HTTP
//! layer never sees a concrete repository.

use std::sync::Arc;

use super::{AuthService, Authenticator, ProductCatalog, ProductService, UserManager, UserService};
use crate::config::Config;
use crate::infra::{ProductRepository, ProductStore, UserRepository, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    product_service: Arc<dyn ProductService>,
    user_service: Arc<dyn UserService>,
    auth_service: Arc<dyn AuthService>,
}

impl Services {
    /// Create a service container from already built services
    pub fn new(
        product_service: Arc<dyn ProductService>,
        user_service: Arc<dyn UserService>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            product_service,
            user_service,
            auth_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let products: Arc<dyn ProductRepository> = Arc::new(ProductStore::new(db.clone()));
        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(db));

        Self {
            product_service: Arc::new(ProductCatalog::new(products)),
            user_service: Arc::new(UserManager::new(users.clone())),
            auth_service: Arc::new(Authenticator::new(users, config)),
        }
    }
}

impl ServiceContainer for Services {
    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }
}
