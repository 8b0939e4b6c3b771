//! Product response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_app::domain::products::records::ProductRecord;

use crate::products::links::{Link, product_links};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub shop: String,
    pub location: String,
    pub price: u64,
    pub discount: u64,
    pub category: String,
    pub stock: u64,
    pub is_available: bool,
    pub picture: String,

    /// Whether the product has been soft deleted
    pub is_delete: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,

    /// Actions available on this product
    #[serde(rename = "_links")]
    pub links: Vec<Link>,
}

impl ProductResponse {
    pub(crate) fn new(product: ProductRecord, base_url: &str) -> Self {
        Self {
            id: product.uuid.into(),
            links: product_links(base_url, product.uuid),
            name: product.name,
            sku: product.sku,
            description: product.description,
            shop: product.shop,
            location: product.location,
            price: product.price,
            discount: product.discount,
            category: product.category,
            stock: product.stock,
            is_available: product.is_available,
            picture: product.picture,
            is_delete: product.is_delete,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    /// The identifier of the soft deleted product
    pub deleted_id: Uuid,
}
