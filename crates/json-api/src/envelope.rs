//! Standard response envelope.
//!
//! Every response body, whatever the outcome, has the same shape:
//!
//! ```json
//! { "success": true, "status_code": 200, "message": "...", "data": ..., "errors": null }
//! ```
//!
//! The HTTP status of the response always equals `status_code`.

use salvo::{
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation},
    prelude::Response,
    writing::{Json, Scribe},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use catalog_app::domain::products::ValidationErrors;

pub(crate) const DEFAULT_NOT_FOUND_MESSAGE: &str = "Resource not found";
pub(crate) const DEFAULT_VALIDATION_MESSAGE: &str = "Validation failed";
pub(crate) const DEFAULT_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Handler outcome where both arms render as an envelope.
pub(crate) type EnvelopeResult = Result<Envelope, Envelope>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Envelope {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    pub data: Option<Value>,
    pub errors: Option<ValidationErrors>,
}

impl Envelope {
    pub(crate) fn success<T: Serialize>(data: &T, message: &str) -> Self {
        Self::success_with_status(data, message, StatusCode::OK)
    }

    pub(crate) fn success_with_status<T: Serialize>(
        data: &T,
        message: &str,
        status: StatusCode,
    ) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self {
                success: true,
                status_code: status.as_u16(),
                message: message.to_string(),
                data: Some(data),
                errors: None,
            },
            Err(source) => {
                error!("failed to serialize response data: {source}");

                Self::server_error(DEFAULT_SERVER_ERROR_MESSAGE)
            }
        }
    }

    pub(crate) fn created<T: Serialize>(data: &T, message: &str) -> Self {
        Self::success_with_status(data, message, StatusCode::CREATED)
    }

    pub(crate) fn not_found(message: &str) -> Self {
        Self::failure(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn validation_error(errors: ValidationErrors, message: &str) -> Self {
        Self {
            errors: Some(errors),
            ..Self::failure(StatusCode::BAD_REQUEST, message)
        }
    }

    pub(crate) fn empty_list(message: &str) -> Self {
        Self {
            success: true,
            status_code: StatusCode::OK.as_u16(),
            message: message.to_string(),
            data: Some(Value::Array(Vec::new())),
            errors: None,
        }
    }

    pub(crate) fn server_error(message: &str) -> Self {
        Self::failure(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Any other unsuccessful outcome, such as an unsupported method.
    pub(crate) fn failure(status: StatusCode, message: &str) -> Self {
        Self {
            success: false,
            status_code: status.as_u16(),
            message: message.to_string(),
            data: None,
            errors: None,
        }
    }

    pub(crate) fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl Scribe for Envelope {
    fn render(self, res: &mut Response) {
        res.status_code(self.status());
        res.render(Json(self));
    }
}

impl EndpointOutRegister for Envelope {
    fn register(_components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::OK, "Success envelope"),
            (StatusCode::BAD_REQUEST, "Validation error envelope"),
            (StatusCode::NOT_FOUND, "Not found envelope"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error envelope"),
        ] {
            operation
                .responses
                .insert(status.as_str(), oapi::Response::new(description));
        }
    }
}
