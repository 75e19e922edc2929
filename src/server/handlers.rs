//! HTTP handlers for the page, the calculation endpoint, and health

use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{Html, Json},
};
use tracing::warn;

use crate::api::{ApiError, ApiResult, CalculationResult, HealthStatus};
use crate::calculator::CalculationRequest;

/// The single-page front end
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /calculate
///
/// The body is read as raw bytes so malformed JSON, a wrong content type, or
/// an oversized payload all come back as structured errors instead of axum's
/// plain-text rejections.
pub async fn calculate_handler(
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<CalculationResult>> {
    let body = body?;

    let request = CalculationRequest::from_slice(&body).inspect_err(|e| {
        warn!(error = %e, body_len = body.len(), "Rejected calculation request");
    })?;

    let result = request.evaluate().inspect_err(|e| {
        warn!(error = %e, operation = %request.operation, "Calculation failed");
    })?;

    Ok(Json(CalculationResult::success(result)))
}

/// Health check endpoint
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

/// Anything not routed
pub async fn not_found_handler() -> ApiError {
    ApiError::not_found("Not found")
}

/// Known path, wrong method
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::custom(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_calculate_handler_success() {
        let body = Bytes::from_static(br#"{"num1": 6, "num2": 7, "operation": "multiply"}"#);
        let Json(result) = calculate_handler(Ok(body)).await.unwrap();
        assert_eq!(result, CalculationResult::success(42.0));
    }

    #[tokio::test]
    async fn test_calculate_handler_domain_error() {
        let body = Bytes::from_static(br#"{"num1": 5, "num2": 0, "operation": "divide"}"#);
        let err = calculate_handler(Ok(body)).await.unwrap_err();
        assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Cannot divide by zero!");
    }

    #[tokio::test]
    async fn test_not_found_handler() {
        let response = not_found_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_method_not_allowed_handler() {
        let err = method_not_allowed_handler().await;
        assert_eq!(err.status_code, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.message, "Method not allowed");
    }

    #[test]
    fn test_index_page_has_form() {
        assert!(INDEX_HTML.contains("<title>Calculator App</title>"));
        assert!(INDEX_HTML.contains(r#"id="num1""#));
        assert!(INDEX_HTML.contains(r#"id="num2""#));
        for op in crate::calculator::Operation::ALL {
            assert!(INDEX_HTML.contains(&format!(r#"data-operation="{op}""#)));
        }
    }
}
