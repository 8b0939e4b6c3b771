//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use catalog_app::domain::products::data::ProductFilter;

use crate::{
    envelope::{Envelope, EnvelopeResult},
    extensions::*,
    products::{
        errors::into_envelope,
        links::base_url,
        messages::{PRODUCTS_RETRIEVED, empty_list_message},
        responses::{ProductResponse, ProductsResponse},
    },
    state::State,
};

/// Product Index Handler
///
/// Returns visible products, newest first, optionally filtered by a
/// case-insensitive substring of the name and/or location.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    location: QueryParam<String, false>,
    req: &mut Request,
    depot: &mut Depot,
) -> EnvelopeResult {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let filter = ProductFilter::new(name.into_inner(), location.into_inner());

    let products = state
        .app
        .products
        .list_products(filter.clone())
        .await
        .map_err(into_envelope)?;

    if products.is_empty() {
        return Ok(Envelope::empty_list(&empty_list_message(&filter)));
    }

    let base_url = base_url(req);

    let products = products
        .into_iter()
        .map(|product| ProductResponse::new(product, &base_url))
        .collect();

    Ok(Envelope::success(
        &ProductsResponse { products },
        PRODUCTS_RETRIEVED,
    ))
}
