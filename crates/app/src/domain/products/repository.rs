//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::products::{
    data::{NewProduct, ProductFields, ProductFilter},
    records::{ProductRecord, ProductUuid},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const SOFT_DELETE_PRODUCTS_SQL: &str = include_str!("sql/soft_delete_products.sql");
const RESTORE_PRODUCTS_SQL: &str = include_str!("sql/restore_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.include_deleted)
            .bind(filter.name.as_deref())
            .bind(filter.location.as_deref())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        let fields = &product.fields;

        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&fields.name)
            .bind(&fields.sku)
            .bind(&fields.description)
            .bind(&fields.shop)
            .bind(&fields.location)
            .bind(to_column("price", fields.price)?)
            .bind(to_column("discount", fields.discount)?)
            .bind(&fields.category)
            .bind(to_column("stock", fields.stock)?)
            .bind(fields.is_available)
            .bind(&fields.picture)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        fields: &ProductFields,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(&fields.name)
            .bind(&fields.sku)
            .bind(&fields.description)
            .bind(&fields.shop)
            .bind(&fields.location)
            .bind(to_column("price", fields.price)?)
            .bind(to_column("discount", fields.discount)?)
            .bind(&fields.category)
            .bind(to_column("stock", fields.stock)?)
            .bind(fields.is_available)
            .bind(&fields.picture)
            .fetch_one(&mut **tx)
            .await
    }

    /// Flag the given visible products as deleted, returning how many changed.
    pub(crate) async fn soft_delete_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductUuid],
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SOFT_DELETE_PRODUCTS_SQL)
            .bind(into_uuids(products))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Clear the deleted flag on the given products, returning how many changed.
    pub(crate) async fn restore_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductUuid],
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(RESTORE_PRODUCTS_SQL)
            .bind(into_uuids(products))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn into_uuids(products: &[ProductUuid]) -> Vec<Uuid> {
    products.iter().copied().map(ProductUuid::into_uuid).collect()
}

fn to_column(column: &str, value: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

fn from_column(row: &PgRow, column: &str) -> Result<u64, sqlx::Error> {
    let value: i64 = row.try_get(column)?;

    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            sku: row.try_get("sku")?,
            description: row.try_get("description")?,
            shop: row.try_get("shop")?,
            location: row.try_get("location")?,
            price: from_column(row, "price")?,
            discount: from_column(row, "discount")?,
            category: row.try_get("category")?,
            stock: from_column(row, "stock")?,
            is_available: row.try_get("is_available")?,
            picture: row.try_get("picture")?,
            is_delete: row.try_get("is_delete")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
