//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    envelope::{Envelope, EnvelopeResult},
    extensions::*,
    products::{
        errors::{into_envelope, parse_product_id},
        links::base_url,
        messages::PRODUCT_UPDATED,
        requests::read_product_fields,
        responses::ProductResponse,
    },
    state::State,
};

/// Update Product Handler
///
/// Replaces every mutable field of a visible product. A product that does
/// not exist or is soft deleted is not found, whatever the body.
#[endpoint(tags("products"), summary = "Update Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> EnvelopeResult {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = parse_product_id(&id.into_inner())?;

    state
        .app
        .products
        .get_product(product)
        .await
        .map_err(into_envelope)?;

    let fields = read_product_fields(req).await?;

    let product = state
        .app
        .products
        .update_product(product, fields)
        .await
        .map_err(into_envelope)?;

    Ok(Envelope::success(
        &ProductResponse::new(product, &base_url(req)),
        PRODUCT_UPDATED,
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductUuid,
    };

    use crate::{
        products::messages::{DUPLICATE_SKU, PRODUCT_NOT_FOUND},
        test_helpers::{make_product, product_fields, product_payload, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(
            repo,
            Router::with_path("products/{id}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .withf(move |product| *product == uuid)
            .return_once(move |_| Ok(make_product(uuid)));

        repo.expect_update_product()
            .once()
            .withf(move |product, fields| {
                *product == uuid && *fields == product_fields("DCD99")
            })
            .return_once(move |_, fields| {
                let mut product = make_product(uuid);
                product.sku = fields.sku;
                Ok(product)
            });

        let mut res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&product_payload("DCD99"))
            .send(&make_service(repo))
            .await;

        let body: Envelope = res.take_json().await?;
        let data = body.data.unwrap_or_default();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.message, PRODUCT_UPDATED);
        assert_eq!(data.get("id"), Some(&json!(uuid.to_string())));
        assert_eq!(data.get("sku"), Some(&json!("DCD99")));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_invalid_payload_returns_400() -> TestResult {
        let uuid = ProductUuid::new();
        let mut payload = product_payload("DCD01");
        payload["discount"] = json!(-10);

        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(move |_| Ok(make_product(uuid)));

        repo.expect_update_product().never();

        let mut res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&payload)
            .send(&make_service(repo))
            .await;

        let body: Envelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.errors.as_ref().and_then(|errors| errors.get("discount")),
            Some(&["Discount must be a positive integer.".to_string()][..])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_not_found_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        repo.expect_update_product().never();

        let mut res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&product_payload("DCD01"))
            .send(&make_service(repo))
            .await;

        let body: Envelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, PRODUCT_NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_with_invalid_body_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .withf(move |product| *product == uuid)
            .return_once(|_| Err(ProductsServiceError::NotFound));

        repo.expect_update_product().never();

        let mut res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&json!({ "name": "", "price": -1 }))
            .send(&make_service(repo))
            .await;

        let body: Envelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(!body.success);
        assert_eq!(body.message, PRODUCT_NOT_FOUND);
        assert_eq!(body.errors, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_malformed_id_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product().never();
        repo.expect_update_product().never();

        let res = TestClient::put("http://example.com/products/123")
            .json(&product_payload("DCD01"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_taken_sku_returns_400() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(move |_| Ok(make_product(uuid)));

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::AlreadyExists));

        let mut res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&product_payload("TAKEN"))
            .send(&make_service(repo))
            .await;

        let body: Envelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.errors.as_ref().and_then(|errors| errors.get("sku")),
            Some(&[DUPLICATE_SKU.to_string()][..])
        );

        Ok(())
    }
}
