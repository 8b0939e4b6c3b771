//! Product request bodies.

use salvo::{Request, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::{
    ValidationErrors,
    data::{ProductDraft, ProductFields},
};

use crate::{
    envelope::{DEFAULT_VALIDATION_MESSAGE, Envelope},
    products::errors::NON_FIELD_ERRORS,
};

/// Product payload used to create or replace a product.
///
/// Fields are optional here so that missing values are reported per field.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Product name
    pub name: Option<String>,

    /// Stock keeping unit, unique across all products
    pub sku: Option<String>,

    pub description: Option<String>,
    pub shop: Option<String>,
    pub location: Option<String>,

    /// Price in whole currency units
    pub price: Option<i64>,

    /// Defaults to zero
    pub discount: Option<i64>,

    pub category: Option<String>,
    pub stock: Option<i64>,

    /// Defaults to `true`
    pub is_available: Option<bool>,

    /// Absolute http(s) URL of the product picture
    pub picture: Option<String>,
}

impl From<ProductRequest> for ProductDraft {
    fn from(request: ProductRequest) -> Self {
        ProductDraft {
            name: request.name,
            sku: request.sku,
            description: request.description,
            shop: request.shop,
            location: request.location,
            price: request.price,
            discount: request.discount,
            category: request.category,
            stock: request.stock,
            is_available: request.is_available,
            picture: request.picture,
        }
    }
}

/// Read the JSON body and validate it into product fields.
///
/// A body that cannot be decoded is reported under `non_field_errors`.
pub(crate) async fn read_product_fields(req: &mut Request) -> Result<ProductFields, Envelope> {
    let request = req
        .parse_json::<ProductRequest>()
        .await
        .map_err(|source| {
            Envelope::validation_error(
                ValidationErrors::single(NON_FIELD_ERRORS, format!("Invalid request body: {source}")),
                DEFAULT_VALIDATION_MESSAGE,
            )
        })?;

    ProductDraft::from(request)
        .validate()
        .map_err(|errors| Envelope::validation_error(errors, DEFAULT_VALIDATION_MESSAGE))
}
