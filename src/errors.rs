// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure the lookup pipeline can surface
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden access")]
    Forbidden,

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Word cloud rendering failed: {0}")]
    RenderError(String),
}

impl AnalyzerError {
    fn error_code(&self) -> &'static str {
        match self {
            AnalyzerError::NotFound(_) => "NOT_FOUND",
            AnalyzerError::ValidationError(_) => "VALIDATION_ERROR",
            AnalyzerError::Unauthorized => "UNAUTHORIZED",
            AnalyzerError::Forbidden => "FORBIDDEN",
            AnalyzerError::ExternalApiError(_) => "EXTERNAL_API_ERROR",
            AnalyzerError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AnalyzerError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            AnalyzerError::RenderError(_) => "RENDER_ERROR",
        }
    }
}

/// Convert AnalyzerError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for AnalyzerError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AnalyzerError::NotFound(_) => StatusCode::NOT_FOUND,
            AnalyzerError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AnalyzerError::Unauthorized => StatusCode::UNAUTHORIZED,
            AnalyzerError::Forbidden => StatusCode::FORBIDDEN,
            AnalyzerError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            AnalyzerError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AnalyzerError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            AnalyzerError::RenderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AnalyzerError::ExternalApiError("boom".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AnalyzerError::MalformedResponse("review 0".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AnalyzerError::RateLimitExceeded.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AnalyzerError::ValidationError("name".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
