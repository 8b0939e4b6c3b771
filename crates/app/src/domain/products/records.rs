//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
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
    pub is_delete: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
