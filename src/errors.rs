use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::OrderNotFound => AppError::NotFound,
            DomainError::Internal(msg) => AppError::Internal(msg),
            DomainError::CustomerNotFound
            | DomainError::ProductNotFound
            | DomainError::InsufficientStock { .. }
            | DomainError::EmailInUse
            | DomainError::ProductNameInUse
            | DomainError::InvalidInput(_) => AppError::BadRequest(e.to_string()),
        }
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Internal(msg) => {
                log::error!("request failed: {}", msg);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use uuid::Uuid;

    #[test]
    fn bad_request_returns_400() {
        let resp = AppError::BadRequest("nope".to_string()).error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound.error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn bad_request_display_is_the_message() {
        assert_eq!(AppError::BadRequest("msg".to_string()).to_string(), "msg");
    }

    #[test]
    fn validation_failures_map_to_bad_request_with_domain_message() {
        let cases = [
            DomainError::CustomerNotFound,
            DomainError::ProductNotFound,
            DomainError::InsufficientStock {
                product_id: Uuid::new_v4(),
            },
            DomainError::EmailInUse,
            DomainError::ProductNameInUse,
            DomainError::InvalidInput("bad value".to_string()),
        ];
        for domain in cases {
            let expected = domain.to_string();
            match AppError::from(domain) {
                AppError::BadRequest(msg) => assert_eq!(msg, expected),
                other => panic!("expected BadRequest, got {:?}", other),
            }
        }
    }

    #[test]
    fn order_not_found_maps_to_app_not_found() {
        let app_err: AppError = DomainError::OrderNotFound.into();
        assert!(matches!(app_err, AppError::NotFound));
    }

    #[test]
    fn domain_internal_maps_to_app_internal() {
        let app_err: AppError = DomainError::Internal("oops".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }
}
