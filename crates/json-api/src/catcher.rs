//! Envelope rendering for responses the router produces without a handler,
//! such as unknown routes, unsupported methods and caught panics.

use salvo::{catcher::Catcher, http::StatusCode, prelude::*};

use crate::envelope::{DEFAULT_NOT_FOUND_MESSAGE, DEFAULT_SERVER_ERROR_MESSAGE, Envelope};

pub(crate) fn envelope_catcher() -> Catcher {
    Catcher::default().hoop(render_envelope)
}

#[handler]
async fn render_envelope(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    res.render(fallback_envelope(status));
    ctrl.skip_rest();
}

fn fallback_envelope(status: StatusCode) -> Envelope {
    if status == StatusCode::NOT_FOUND {
        return Envelope::not_found(DEFAULT_NOT_FOUND_MESSAGE);
    }

    if status.is_server_error() {
        return Envelope::server_error(DEFAULT_SERVER_ERROR_MESSAGE);
    }

    Envelope::failure(status, status.canonical_reason().unwrap_or("Request failed"))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn broken(res: &mut Response) {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
    }

    fn make_service() -> Service {
        Service::new(Router::new().push(Router::with_path("broken").get(broken)))
            .catcher(envelope_catcher())
    }

    #[tokio::test]
    async fn test_unknown_route_renders_not_found_envelope() -> TestResult {
        let mut res = TestClient::get("http://example.com/nowhere")
            .send(&make_service())
            .await;

        let body: Envelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(!body.success);
        assert_eq!(body.status_code, 404);
        assert_eq!(body.message, DEFAULT_NOT_FOUND_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_bare_server_error_renders_envelope() -> TestResult {
        let mut res = TestClient::get("http://example.com/broken")
            .send(&make_service())
            .await;

        let body: Envelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.status_code, 500);
        assert_eq!(body.message, DEFAULT_SERVER_ERROR_MESSAGE);

        Ok(())
    }

    #[test]
    fn other_statuses_use_canonical_reason() {
        let envelope = fallback_envelope(StatusCode::METHOD_NOT_ALLOWED);

        assert!(!envelope.success);
        assert_eq!(envelope.status_code, 405);
        assert_eq!(envelope.message, "Method Not Allowed");
    }
}
