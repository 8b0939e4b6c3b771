//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    envelope::{Envelope, EnvelopeResult},
    extensions::*,
    products::{
        errors::{into_envelope, parse_product_id},
        links::base_url,
        messages::PRODUCT_RETRIEVED,
        responses::ProductResponse,
    },
    state::State,
};

/// Get Product Handler
///
/// Returns a product. Soft deleted products are not found.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> EnvelopeResult {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = parse_product_id(&id.into_inner())?;

    let product = state
        .app
        .products
        .get_product(product)
        .await
        .map_err(into_envelope)?;

    Ok(Envelope::success(
        &ProductResponse::new(product, &base_url(req)),
        PRODUCT_RETRIEVED,
    ))
}
