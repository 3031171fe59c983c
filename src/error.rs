use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use leptos::logging::error;
use serde::Serialize;
use thiserror::Error;

/// Unified error type for every route handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("This function must be called via a REST API request.")]
    InvalidRequest,

    #[error("No text provided for analysis.")]
    EmptyText,

    #[error("A review needs a title.")]
    EmptyTitle,

    #[error("No review found with id {0}.")]
    NotFound(i64),

    #[error("Invalid form submission: {0}")]
    InvalidForm(String),

    #[error("No route was found matching the URL: {0}")]
    NoRoute(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("render error: {0}")]
    Render(String),
}

#[derive(Serialize)]
struct ErrorData {
    status: u16,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    data: ErrorData,
}

impl ApiError {
    /// Machine-readable error kind sent as `code`.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest => "invalid_request",
            ApiError::EmptyText => "empty_text",
            ApiError::EmptyTitle => "empty_title",
            ApiError::NotFound(_) => "not_found",
            ApiError::InvalidForm(_) => "invalid_form",
            ApiError::NoRoute(_) => "rest_no_route",
            ApiError::Database(_) => "db_error",
            ApiError::Render(_) => "render_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest
            | ApiError::EmptyText
            | ApiError::EmptyTitle
            | ApiError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::NoRoute(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            ApiError::Database(_) | ApiError::Render(_) => {
                error!("[SERVER ERROR] {}", self);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(ErrorBody {
            code: self.code(),
            message,
            data: ErrorData {
                status: status.as_u16(),
            },
        })
    }
}
