use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::warn;

use crate::metrics;

/// Rejections surfaced to HTTP callers. All are client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed json body: {0}")]
    MalformedBody(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    /// The fixed message placed in the `error` field of the response body.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MalformedBody(_) => "malformed json body",
            ApiError::Service(ServiceError::InvalidCategory(_)) => "invalid kind",
            ApiError::Service(ServiceError::MissingFields(_)) => "missing fields",
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::MalformedBody(_) => "malformed_body",
            ApiError::Service(e) => e.reason(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let reason = self.reason();
        warn!(reason, error = %self, "write rejected");
        metrics::REJECTED_WRITES_TOTAL.with_label_values(&[reason]).inc();
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": self.public_message()})),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn service_errors_map_to_fixed_messages() {
        let cases = [
            (ApiError::from(ServiceError::InvalidCategory("bogus".into())), "invalid kind"),
            (ApiError::from(ServiceError::MissingFields(vec!["zip".into()])), "missing fields"),
            (ApiError::MalformedBody("eof".into()), "malformed json body"),
        ];
        for (err, msg) in cases {
            let resp = err.into_response();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(v, serde_json::json!({"error": msg}));
        }
    }
}
