use actix_web::{http::StatusCode, HttpResponse};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    InvalidRequest(String),
    IdentityError(String),
    DatabaseError(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
}

impl AppError {
    /// Message carried in the JSON `detail` field, without the log prefix.
    pub fn detail(&self) -> &str {
        match self {
            AppError::InvalidRequest(msg)
            | AppError::IdentityError(msg)
            | AppError::DatabaseError(msg)
            | AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg) => msg,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            // Identity-provider and store failures surface as generic client errors
            AppError::InvalidRequest(_)
            | AppError::IdentityError(_)
            | AppError::DatabaseError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }

    pub fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "detail": self.detail()
        }))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::IdentityError(msg) => write!(f, "Identity provider error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
