//! Error handling - RFC 7807 compliant responses.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use folio_core::DomainError;
use folio_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::PayloadTooLarge(detail) => ErrorResponse::payload_too_large(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::StorageUnavailable(msg) => {
                tracing::error!("Post storage unavailable: {}", msg);
                AppError::Internal("Storage unavailable".to_string())
            }
            DomainError::InvalidState(msg) => AppError::Internal(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Render JSON body extraction failures as problem responses.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            AppError::PayloadTooLarge(err.to_string()).into()
        }
        other => AppError::BadRequest(other.to_string()).into(),
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        let cases = [
            (DomainError::post_not_found("9"), StatusCode::NOT_FOUND),
            (
                DomainError::Validation("bad path".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::StorageUnavailable("gone".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DomainError::InvalidState("empty".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (domain, status) in cases {
            assert_eq!(AppError::from(domain).status_code(), status);
        }
    }

    #[test]
    fn test_json_overflow_is_payload_too_large() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let err = json_error_handler(JsonPayloadError::Overflow { limit: 4 }, &req);
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_not_found_detail_names_the_post() {
        let err = AppError::from(DomainError::post_not_found("42"));
        assert_eq!(err.to_string(), "Not found: Post with id 42 not found");
    }
}
