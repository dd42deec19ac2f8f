//! Product service - Product lifecycle use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{EntityId, Product};
use crate::errors::AppResult;
use crate::infra::ProductRepository;
use crate::types::ListQuery;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Validate and store a new product
    async fn create_product(&self, name: String, price: f64) -> AppResult<Product>;

    /// Get product by ID
    async fn get_product(&self, id: EntityId) -> AppResult<Product>;

    /// List products, optionally paginated
    async fn list_products(&self, query: &ListQuery) -> AppResult<Vec<Product>>;

    /// Replace name and price of an existing product (last write wins)
    async fn update_product(&self, id: EntityId, name: String, price: f64) -> AppResult<Product>;

    /// Delete product by ID
    async fn delete_product(&self, id: EntityId) -> AppResult<()>;
}

/// Concrete implementation of ProductService over a repository.
pub struct ProductCatalog<R: ProductRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ProductRepository + ?Sized> ProductCatalog<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: ProductRepository + ?Sized> ProductService for ProductCatalog<R> {
    async fn create_product(&self, name: String, price: f64) -> AppResult<Product> {
        let product = Product::create(name, price)?;
        self.repo.create(&product).await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    async fn get_product(&self, id: EntityId) -> AppResult<Product> {
        self.repo.find_by_id(id).await
    }

    async fn list_products(&self, query: &ListQuery) -> AppResult<Vec<Product>> {
        self.repo.find_all(query).await
    }

    async fn update_product(&self, id: EntityId, name: String, price: f64) -> AppResult<Product> {
        let mut product = self.repo.find_by_id(id).await?;
        product.apply(name, price);
        product.validate()?;
        self.repo.update(&product).await?;

        tracing::info!(product_id = %id, "Product updated");
        Ok(product)
    }

    async fn delete_product(&self, id: EntityId) -> AppResult<()> {
        self.repo.delete(id).await?;

        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
