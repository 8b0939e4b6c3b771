//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    envelope::{Envelope, EnvelopeResult},
    extensions::*,
    products::{
        errors::{into_envelope, parse_product_id},
        messages::PRODUCT_DELETED,
        responses::ProductDeletedResponse,
    },
    state::State,
};

/// Delete Product Handler
///
/// Soft deletes a product. The record is kept but no longer visible.
#[endpoint(tags("products"), summary = "Delete Product")]
pub(crate) async fn handler(id: PathParam<String>, depot: &mut Depot) -> EnvelopeResult {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = parse_product_id(&id.into_inner())?;

    state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(into_envelope)?;

    Ok(Envelope::success(
        &ProductDeletedResponse {
            deleted_id: product.into(),
        },
        PRODUCT_DELETED,
    ))
}
