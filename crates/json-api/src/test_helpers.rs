//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use serde_json::{Value, json};

use catalog_app::{
    context::AppContext,
    domain::products::{
        MockProductsService,
        data::ProductFields,
        records::{ProductRecord, ProductUuid},
    },
};

use crate::{catcher, state::State};

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
    .catcher(catcher::envelope_catcher())
}

/// Request body for the sample product with the given SKU.
pub(crate) fn product_payload(sku: &str) -> Value {
    json!({
        "name": "Kelas Belajar Python",
        "sku": sku,
        "description": "This is a sample description of the product.",
        "shop": "Dicoding",
        "location": "Bandung",
        "price": 1_500_000,
        "discount": 0,
        "category": "Course",
        "stock": 1000,
        "is_available": true,
        "picture": "https://example.com/picture.jpg",
    })
}

/// Validated fields matching [`product_payload`].
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

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    let fields = product_fields("DCD01");

    ProductRecord {
        uuid,
        name: fields.name,
        sku: fields.sku,
        description: fields.description,
        shop: fields.shop,
        location: fields.location,
        price: fields.price,
        discount: fields.discount,
        category: fields.category,
        stock: fields.stock,
        is_available: fields.is_available,
        picture: fields.picture,
        is_delete: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
