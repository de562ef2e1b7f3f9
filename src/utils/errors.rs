use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use uuid::Uuid;

use crate::api::views;
use crate::domain::record::StoreError;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl ApiError {
    /// Text rendered on the error page. Store and server failures keep their
    /// detail out of the page; it has already been logged.
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::ServiceUnavailable(_) => {
                "The database is currently unavailable. Please try again later."
            }
            ApiError::InternalServerError(_) => "An error occurred while processing your request.",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Unavailable(detail) => ApiError::ServiceUnavailable(detail),
            StoreError::Conflict(detail) | StoreError::Unknown(detail) => {
                ApiError::InternalServerError(detail)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let request_id = Uuid::new_v4().to_string();
        log::error!("Request {} failed: {}", request_id, self);

        HttpResponse::build(self.status_code())
            .content_type("text/html; charset=utf-8")
            .body(views::error_page(
                self.status_code().as_u16(),
                self.public_message(),
                Some(&request_id),
            ))
    }
}

/// Status used when a form submission fails in the store.
pub fn store_error_status(error: &StoreError) -> StatusCode {
    match error {
        StoreError::Conflict(_) => StatusCode::CONFLICT,
        StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        StoreError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// ----------------------------- TESTS --------------------------------
