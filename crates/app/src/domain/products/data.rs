//! Products Data

use crate::domain::products::records::ProductUuid;

/// Unvalidated product input, as received from a caller.
///
/// Every field is optional so that missing values can be reported per field
/// alongside any other validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub shop: Option<String>,
    pub location: Option<String>,
    pub price: Option<i64>,
    pub discount: Option<i64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
    pub is_available: Option<bool>,
    pub picture: Option<String>,
}

/// Validated mutable product fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
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
}

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub fields: ProductFields,
}

/// Product listing filter.
///
/// Name and location match case-insensitively as substrings and are combined
/// with AND. Soft-deleted products are excluded unless `include_deleted` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub location: Option<String>,
    pub include_deleted: bool,
}

impl ProductFilter {
    /// Build a filter over visible products, treating empty values as absent.
    #[must_use]
    pub fn new(name: Option<String>, location: Option<String>) -> Self {
        Self {
            name: name.filter(|value| !value.is_empty()),
            location: location.filter(|value| !value.is_empty()),
            include_deleted: false,
        }
    }

    #[must_use]
    pub fn including_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }
}
