//! Product Errors

use tracing::error;

use catalog_app::domain::products::{
    ProductsServiceError, ValidationErrors, records::ProductUuid,
};

use crate::{
    envelope::{DEFAULT_SERVER_ERROR_MESSAGE, DEFAULT_VALIDATION_MESSAGE, Envelope},
    products::messages::{DUPLICATE_SKU, INVALID_PRODUCT_DATA, PRODUCT_NOT_FOUND},
};

/// Key for validation messages that are not tied to a single field.
pub(crate) const NON_FIELD_ERRORS: &str = "non_field_errors";

pub(crate) fn into_envelope(error: ProductsServiceError) -> Envelope {
    match error {
        ProductsServiceError::NotFound => Envelope::not_found(PRODUCT_NOT_FOUND),
        ProductsServiceError::AlreadyExists => Envelope::validation_error(
            ValidationErrors::single("sku", DUPLICATE_SKU),
            DEFAULT_VALIDATION_MESSAGE,
        ),
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            Envelope::validation_error(
                ValidationErrors::single(NON_FIELD_ERRORS, INVALID_PRODUCT_DATA),
                DEFAULT_VALIDATION_MESSAGE,
            )
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failed: {source}");

            Envelope::server_error(DEFAULT_SERVER_ERROR_MESSAGE)
        }
    }
}

/// Parse a path identifier; anything that is not a UUID cannot name a product.
pub(crate) fn parse_product_id(id: &str) -> Result<ProductUuid, Envelope> {
    id.parse::<ProductUuid>()
        .map_err(|_invalid| Envelope::not_found(PRODUCT_NOT_FOUND))
}
