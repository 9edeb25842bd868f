use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use orderflow_fulfillment::FulfillmentError;

/// Map an engine error to an HTTP response.
///
/// Client-side problems echo the error message; collaborator failures are logged
/// and answered with a generic message.
pub fn fulfillment_error_to_response(err: FulfillmentError) -> axum::response::Response {
    match err {
        FulfillmentError::OrderNotFound(_) => {
            tracing::warn!(error = %err, "order not found");
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        FulfillmentError::UnsupportedCategory(_) => {
            tracing::warn!(error = %err, "unsupported product type");
            json_error(StatusCode::BAD_REQUEST, "unsupported_product_type", err.to_string())
        }
        FulfillmentError::InvalidProduct(_) => {
            tracing::warn!(error = %err, "invalid product data");
            json_error(StatusCode::BAD_REQUEST, "invalid_product", err.to_string())
        }
        FulfillmentError::DuplicatePolicy(_) | FulfillmentError::Collaborator(_) => {
            tracing::error!(error = %err, "order processing failed");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An unexpected error occurred",
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "status": status.as_u16(),
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
