//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use catalog_app::domain::products::{data::NewProduct, records::ProductUuid};

use crate::{
    envelope::{Envelope, EnvelopeResult},
    extensions::*,
    products::{
        errors::into_envelope,
        links::base_url,
        messages::PRODUCT_CREATED,
        requests::read_product_fields,
        responses::ProductResponse,
    },
    state::State,
};

/// Create Product Handler
///
/// Validates the payload and stores it under a freshly generated identifier.
#[endpoint(tags("products"), summary = "Create Product")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> EnvelopeResult {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let fields = read_product_fields(req).await?;

    let product = state
        .app
        .products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            fields,
        })
        .await
        .map_err(into_envelope)?;

    res.add_header(LOCATION, format!("/products/{}/", product.uuid), true)
        .or_500("failed to set location header")?;

    Ok(Envelope::created(
        &ProductResponse::new(product, &base_url(req)),
        PRODUCT_CREATED,
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductRecord,
    };

    use crate::{
        products::messages::DUPLICATE_SKU,
        test_helpers::{product_fields, product_payload, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").post(handler))
    }

    fn stored(new: &NewProduct) -> ProductRecord {
        let mut product = crate::test_helpers::make_product(new.uuid);
        product.name.clone_from(&new.fields.name);
        product.sku.clone_from(&new.fields.sku);
        product
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| new.fields == product_fields("DCD01"))
            .returning(|new| Ok(stored(&new)));

        let mut res = TestClient::post("http://example.com/products")
            .json(&product_payload("DCD01"))
            .send(&make_service(repo))
            .await;

        let body: Envelope = res.take_json().await?;
        let data = body.data.unwrap_or_default();
        let location = res
            .headers()
            .get("location")
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            location,
            data.get("id")
                .and_then(|id| id.as_str())
                .map(|id| format!("/products/{id}/"))
        );
        assert!(body.success);
        assert_eq!(body.status_code, 201);
        assert_eq!(body.message, PRODUCT_CREATED);
        assert_eq!(data.get("name"), Some(&json!("Kelas Belajar Python")));
        assert_eq!(data.get("sku"), Some(&json!("DCD01")));
        assert_eq!(data.get("is_delete"), Some(&json!(false)));
        assert!(
            data.get("id").and_then(|id| id.as_str()).is_some(),
            "expected a generated id"
        );
        assert_eq!(
            data.get("_links").and_then(|links| links.as_array()).map(Vec::len),
            Some(4)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_defaults_optional_fields() -> TestResult {
        let mut payload = product_payload("DCD02");

        if let Some(object) = payload.as_object_mut() {
            object.remove("discount");
            object.remove("is_available");
        }

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| new.fields.discount == 0 && new.fields.is_available)
            .returning(|new| Ok(stored(&new)));

        let res = TestClient::post("http://example.com/products")
            .json(&payload)
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_negative_price_returns_400() -> TestResult {
        let mut payload = product_payload("DCD01");
        payload["price"] = json!(-1);
        payload["stock"] = json!(-5);

        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&payload)
            .send(&make_service(repo))
            .await;

        let body: Envelope = res.take_json().await?;
        let errors = body.errors.unwrap_or_default();

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(!body.success);
        assert_eq!(body.message, "Validation failed");
        assert_eq!(body.data, None);
        assert_eq!(
            errors.get("price"),
            Some(&["Price must be a positive integer.".to_string()][..])
        );
        assert_eq!(
            errors.get("stock"),
            Some(&["Stock must be a positive integer.".to_string()][..])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_blank_name_returns_400() -> TestResult {
        let mut payload = product_payload("DCD01");
        payload["name"] = json!("   ");
        payload["sku"] = json!("");

        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&payload)
            .send(&make_service(repo))
            .await;

        let body: Envelope = res.take_json().await?;
        let errors = body.errors.unwrap_or_default();

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            errors.get("name"),
            Some(&["Name cannot be blank.".to_string()][..])
        );
        assert_eq!(
            errors.get("sku"),
            Some(&["SKU cannot be blank.".to_string()][..])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_wrong_types_return_non_field_error() -> TestResult {
        let mut payload = product_payload("DCD01");
        payload["price"] = json!("a lot");

        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&payload)
            .send(&make_service(repo))
            .await;

        let body: Envelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            body.errors
                .as_ref()
                .and_then(|errors| errors.get("non_field_errors"))
                .is_some(),
            "expected a non-field error"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_duplicate_sku_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        let mut res = TestClient::post("http://example.com/products")
            .json(&product_payload("DCD01"))
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
