//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductFields, ProductFilter},
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.list_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        debug!(product_uuid = %created.uuid, sku = %created.sku, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        fields: ProductFields,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &fields)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .repository
            .soft_delete_products(&mut tx, &[product])
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn delete_products(&self, products: Vec<ProductUuid>) -> Result<u64, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .repository
            .soft_delete_products(&mut tx, &products)
            .await?;

        tx.commit().await?;

        Ok(rows_affected)
    }

    async fn restore_products(
        &self,
        products: Vec<ProductUuid>,
    ) -> Result<u64, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.restore_products(&mut tx, &products).await?;

        tx.commit().await?;

        Ok(rows_affected)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves products matching the filter, most recently created first.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product that has not been soft deleted.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(&self, product: NewProduct)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces every mutable field of a visible product.
    async fn update_product(
        &self,
        product: ProductUuid,
        fields: ProductFields,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Soft deletes a visible product.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Soft deletes every visible product in `products`, returning how many were deleted.
    async fn delete_products(&self, products: Vec<ProductUuid>) -> Result<u64, ProductsServiceError>;

    /// Clears the soft-delete flag, returning how many products were restored.
    async fn restore_products(&self, products: Vec<ProductUuid>)
    -> Result<u64, ProductsServiceError>;
}
