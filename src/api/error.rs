use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Session is no longer authorized")]
    Unauthorized,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Error body shape the backend uses for every failure class
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    /// Server-supplied `detail` field, or the truncated raw body.
    fn detail_from_body(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.detail)
            .unwrap_or_else(|_| Self::truncate_body(body))
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = Self::detail_from_body(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(detail),
            404 => ApiError::NotFound(detail),
            400 | 422 => ApiError::Validation(detail),
            500..=599 => ApiError::ServerError(detail),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, detail)),
        }
    }

    /// Message for the advisory notification channel: the server's detail
    /// when one was supplied, a generic description otherwise.
    pub fn notice(&self) -> String {
        match self {
            ApiError::AccessDenied(detail)
            | ApiError::NotFound(detail)
            | ApiError::Validation(detail)
            | ApiError::ServerError(detail)
                if !detail.is_empty() =>
            {
                detail.clone()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_maps_authorization_failure() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, r#"{"detail":"expired"}"#);
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[test]
    fn test_from_status_extracts_detail_field() {
        let err = ApiError::from_status(
            StatusCode::FORBIDDEN,
            r#"{"detail":"Insufficient privileges"}"#,
        );
        match err {
            ApiError::AccessDenied(detail) => assert_eq!(detail, "Insufficient privileges"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_status_falls_back_to_raw_body() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "plain text failure");
        match err {
            ApiError::ServerError(detail) => assert_eq!(detail, "plain text failure"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_status_maps_validation_statuses() {
        for status in [StatusCode::BAD_REQUEST, StatusCode::UNPROCESSABLE_ENTITY] {
            let err = ApiError::from_status(status, r#"{"detail":"Invalid credentials"}"#);
            assert!(matches!(err, ApiError::Validation(_)), "status {status}");
        }
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(2000);
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, &body);
        let text = err.to_string();
        assert!(text.contains("truncated"));
        assert!(text.len() < body.len());
    }

    #[test]
    fn test_notice_prefers_server_detail() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, r#"{"detail":"No such gig"}"#);
        assert_eq!(err.notice(), "No such gig");
    }

    #[test]
    fn test_notice_falls_back_for_empty_detail() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "");
        assert_eq!(err.notice(), "Resource not found: ");
    }
}
