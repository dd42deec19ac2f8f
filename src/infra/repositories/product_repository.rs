//! Product repository: the storage port for products.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::{EntityId, Product};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::ListQuery;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product
    async fn create(&self, product: &Product) -> AppResult<()>;

    /// Find product by ID, `NotFound` on miss
    async fn find_by_id(&self, id: EntityId) -> AppResult<Product>;

    /// Overwrite name and price of the stored product with the same ID.
    /// `NotFound` if no such row exists.
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// Delete product by ID, `NotFound` if nothing was removed
    async fn delete(&self, id: EntityId) -> AppResult<()>;

    /// List products ordered by creation time (ties broken by ID),
    /// optionally restricted to one page
    async fn find_all(&self, query: &ListQuery) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn create(&self, product: &Product) -> AppResult<()> {
        let active_model = ActiveModel {
            id: Set(Uuid::from(product.id)),
            name: Set(product.name.clone()),
            price: Set(product.price),
            created_at: Set(product.created_at),
        };

        ProductEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Product> {
        ProductEntity::find_by_id(Uuid::from(id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(Product::from)
            .ok_or_not_found()
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let changes = ActiveModel {
            id: NotSet,
            name: Set(product.name.clone()),
            price: Set(product.price),
            created_at: NotSet,
        };

        let result = ProductEntity::update_many()
            .set(changes)
            .filter(product::Column::Id.eq(Uuid::from(product.id)))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: EntityId) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(Uuid::from(id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn find_all(&self, query: &ListQuery) -> AppResult<Vec<Product>> {
        let mut select = ProductEntity::find()
            .order_by(product::Column::CreatedAt, query.sort.into())
            .order_by(product::Column::Id, query.sort.into());

        if let Some(window) = query.window() {
            select = select.offset(window.offset).limit(window.limit);
        }

        let models = select.all(&self.db).await.map_err(AppError::from)?;
        Ok(models.into_iter().map(Product::from).collect())
    }
}
