//! Iconfinder API errors.

use thiserror::Error;

/// Errors returned by the API client.
///
/// The API's error hierarchy is flattened into one enum; use
/// [`is_bad_request`](ApiError::is_bad_request) and
/// [`is_permission_denied`](ApiError::is_permission_denied) to match a whole
/// family.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 without a more specific code.
    #[error("{message}")]
    BadRequest { message: String },

    /// 400 with an `invalid_<parameter>` error code.
    #[error("{message} ({parameter})")]
    InvalidParameter { message: String, parameter: String },

    /// 401.
    #[error("{message}")]
    BadCredentials { message: String },

    /// 403 without a more specific code.
    #[error("{message}")]
    PermissionDenied { message: String },

    /// 403 with the `insufficient_permissions` code. The credentials lack the
    /// scope needed for the resource.
    #[error("{message}")]
    InsufficientPermissions { message: String },

    /// Premium resource that the authenticated user has not purchased.
    #[error("{message}")]
    NotPurchased { message: String },

    /// 404.
    #[error("{message}")]
    NotFound { message: String },

    /// 429.
    #[error("{message}")]
    RateLimitExceeded { message: String },

    /// 500.
    #[error("{message}")]
    InternalServer { message: String },

    /// Any other status of 400 or above.
    #[error("unexpected response with status code {status}")]
    UnexpectedResponse { status: u16 },

    /// Connection, TLS or protocol failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected model.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client built from an invalid configuration.
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    /// Malformed HTTP date.
    #[error("{0:?} is not a valid RFC1123 date/time")]
    InvalidDate(String),
}

impl ApiError {
    /// True for `BadRequest` and its refinement `InvalidParameter`.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::BadRequest { .. } | Self::InvalidParameter { .. })
    }

    /// True for `PermissionDenied` and its refinement `InsufficientPermissions`.
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied { .. } | Self::InsufficientPermissions { .. }
        )
    }

    /// Offending parameter name for `InvalidParameter`.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::InvalidParameter { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_is_a_bad_request() {
        let err = ApiError::InvalidParameter {
            message: "count must be positive".into(),
            parameter: "count".into(),
        };
        assert!(err.is_bad_request());
        assert!(!err.is_permission_denied());
        assert_eq!(err.parameter(), Some("count"));
    }

    #[test]
    fn insufficient_permissions_is_permission_denied() {
        let err = ApiError::InsufficientPermissions {
            message: "scope".into(),
        };
        assert!(err.is_permission_denied());
        assert!(!err.is_bad_request());
        assert_eq!(err.parameter(), None);
    }

    #[test]
    fn unexpected_response_displays_status() {
        let err = ApiError::UnexpectedResponse { status: 418 };
        assert_eq!(err.to_string(), "unexpected response with status code 418");
    }

    #[test]
    fn invalid_date_quotes_input() {
        let err = ApiError::InvalidDate("Sun, 01 Jar 2012".into());
        assert_eq!(
            err.to_string(),
            "\"Sun, 01 Jar 2012\" is not a valid RFC1123 date/time"
        );
    }
}
