use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::order::OrderError;

// ============================================================================
// HTTP Error Mapping
// ============================================================================
//
// NotFound -> 404, duplicate order number -> 409, unreadable input -> 400,
// anything else -> 500. Bodies are `{"detail": "..."}`; internal causes are
// logged and never sent to the client.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn detail(&self) -> String {
        match self {
            ApiError::Order(OrderError::NotFound(_)) => "Order not found".to_string(),
            ApiError::Order(OrderError::DuplicateOrderNumber(number)) => {
                format!("Order number already exists: {number}")
            }
            ApiError::Order(_) => "Internal server error".to_string(),
            ApiError::BadRequest(message) => message.clone(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Order(OrderError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Order(OrderError::DuplicateOrderNumber(_)) => StatusCode::CONFLICT,
            ApiError::Order(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        HttpResponse::build(status).json(serde_json::json!({ "detail": self.detail() }))
    }
}
