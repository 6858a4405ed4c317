//! Client error types

use thiserror::Error;

/// Client error types
///
/// Status-carrying variants keep the response body exactly as the server sent
/// it so callers can show validation messages verbatim.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, transport or response decoding error
    ///
    /// reqwest reports malformed JSON bodies here too.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status of a rejected request, if the server answered at all
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body of a rejected request, untouched
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::BadRequest(message)
            | Self::AuthenticationFailed(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::ServerError { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_mapping_keeps_body() {
        let body = r#"{"username":["A user with that username already exists."]}"#;
        let err = ClientError::from_status(StatusCode::BAD_REQUEST, body.to_string());

        assert!(matches!(err, ClientError::BadRequest(_)));
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.payload(), Some(body));
    }

    #[test]
    fn test_unmapped_status_is_server_error() {
        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, "upstream".to_string());
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.payload(), Some("upstream"));
    }

    #[test]
    fn test_configuration_error_has_no_payload() {
        let err = ClientError::Configuration("base_url is required".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.payload(), None);
    }
}
