//! Response envelope
//!
//! Every API response is a JSON object with a `success` flag. Failures carry an
//! `error` message and the matching HTTP status.

use salvo::{
    Response,
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::Json,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure envelope body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorEnvelope {
    /// Always `false`
    pub success: bool,

    /// Human-readable reason
    pub error: String,
}

/// Success envelope carrying only a message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageEnvelope {
    /// Always `true`
    pub success: bool,

    /// Outcome description
    pub message: String,
}

impl MessageEnvelope {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// An error rendered as `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{status}: {error}")]
pub(crate) struct ApiError {
    pub status: StatusCode,
    pub error: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }

    pub(crate) fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    pub(crate) fn not_found(error: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error)
    }

    pub(crate) fn internal(error: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorEnvelope {
            success: false,
            error: self.error,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::NOT_FOUND, "Not Found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", ErrorEnvelope::to_schema(components)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn failing() -> Result<Json<MessageEnvelope>, ApiError> {
        Err(ApiError::not_found("Product not found"))
    }

    #[handler]
    async fn succeeding() -> Result<Json<MessageEnvelope>, ApiError> {
        Ok(Json(MessageEnvelope::new("done")))
    }

    fn service() -> Service {
        Service::new(
            Router::new()
                .push(Router::with_path("fail").get(failing))
                .push(Router::with_path("ok").get(succeeding)),
        )
    }

    #[tokio::test]
    async fn test_error_renders_failure_envelope() -> TestResult {
        let mut res = TestClient::get("http://example.com/fail")
            .send(&service())
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(!body.success, "failure envelope must not report success");
        assert_eq!(body.error, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_message_envelope_reports_success() -> TestResult {
        let mut res = TestClient::get("http://example.com/ok")
            .send(&service())
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            serde_json::json!({ "success": true, "message": "done" })
        );

        Ok(())
    }

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(ApiError::bad_request("x").status, StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::internal("x").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
