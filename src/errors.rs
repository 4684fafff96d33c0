// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for search, export and configuration

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure a search session can surface
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Please enter only one of Area / ZIP Code.")]
    InputConflict,

    #[error("Please enter a ZIP Code or an Area.")]
    EmptyInput,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Cannot find localities and coordinates for ZIP code {0}")]
    GeocodeNotFound(String),

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Export error: {0}")]
    ExportError(String),
}

impl ScrapeError {
    /// Stable machine-readable code used in JSON error bodies
    pub fn code(&self) -> &'static str {
        match self {
            ScrapeError::InputConflict => "INPUT_CONFLICT",
            ScrapeError::EmptyInput => "EMPTY_INPUT",
            ScrapeError::ValidationError(_) => "VALIDATION_ERROR",
            ScrapeError::GeocodeNotFound(_) => "GEOCODE_NOT_FOUND",
            ScrapeError::ExternalApiError(_) => "EXTERNAL_API_ERROR",
            ScrapeError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            ScrapeError::ConfigError(_) => "CONFIG_ERROR",
            ScrapeError::ExportError(_) => "EXPORT_ERROR",
        }
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        ScrapeError::ExternalApiError(format!("Request failed: {}", e))
    }
}

impl From<csv::Error> for ScrapeError {
    fn from(e: csv::Error) -> Self {
        ScrapeError::ExportError(e.to_string())
    }
}

/// Convert ScrapeError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for ScrapeError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ScrapeError::InputConflict => StatusCode::BAD_REQUEST,
            ScrapeError::EmptyInput => StatusCode::BAD_REQUEST,
            ScrapeError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ScrapeError::GeocodeNotFound(_) => StatusCode::NOT_FOUND,
            ScrapeError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            ScrapeError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            ScrapeError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScrapeError::ExportError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
