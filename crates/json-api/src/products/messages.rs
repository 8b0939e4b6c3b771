//! Product response messages.

use catalog_app::domain::products::data::ProductFilter;

pub(crate) const PRODUCTS_RETRIEVED: &str = "Products retrieved successfully";
pub(crate) const PRODUCT_RETRIEVED: &str = "Product retrieved successfully";
pub(crate) const PRODUCT_CREATED: &str = "Product created successfully";
pub(crate) const PRODUCT_UPDATED: &str = "Product updated successfully";
pub(crate) const PRODUCT_DELETED: &str = "Product deleted successfully";
pub(crate) const PRODUCT_NOT_FOUND: &str = "Product not found";
pub(crate) const DUPLICATE_SKU: &str = "product with this sku already exists.";
pub(crate) const INVALID_PRODUCT_DATA: &str = "Invalid product data.";

/// Message for a listing with no matches, naming the filters that were applied.
pub(crate) fn empty_list_message(filter: &ProductFilter) -> String {
    match (filter.name.as_deref(), filter.location.as_deref()) {
        (None, None) => "No products found".to_string(),
        (Some(name), None) => format!("No products found matching name '{name}'"),
        (None, Some(location)) => format!("No products found in location '{location}'"),
        (Some(name), Some(location)) => {
            format!("No products found matching name '{name}' in location '{location}'")
        }
    }
}
