//! Test Helpers

use crate::domain::products::data::ProductFields;

pub(crate) fn product_fields(sku: &str) -> ProductFields {
    ProductFields {
        name: "Kelas Belajar Python".to_string(),
        sku: sku.to_string(),
        description: "This is a sample description of the product.".to_string(),
        shop: "Dicoding".to_string(),
        location: "Bandung".to_string(),
        price: 1_500_000,
        discount: 0,
        category: "Course".to_string(),
        stock: 1000,
        is_available: true,
        picture: "https://example.com/picture.jpg".to_string(),
    }
}
