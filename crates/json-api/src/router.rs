//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use crate::{
    healthcheck,
    observability::{metrics_handler, request_logging},
    products,
    state::State,
};

pub(crate) fn app_router(state: Arc<State>, metrics_enabled: bool) -> Router {
    let router = Router::new()
        .hoop(request_logging)
        .hoop(CatchPanic::new())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(products_router());

    if metrics_enabled {
        router.push(Router::with_path("metrics").get(metrics_handler))
    } else {
        router
    }
}

pub(crate) fn products_router() -> Router {
    Router::with_path("products")
        .get(products::index::handler)
        .post(products::create::handler)
        .push(
            Router::with_path("{id}")
                .get(products::get::handler)
                .put(products::update::handler)
                .delete(products::delete::handler),
        )
}
