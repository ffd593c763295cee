// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Failures talking to the food backend.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection refused, DNS failure, TLS failure...
    Network(String),

    /// The request did not complete within the configured timeout
    Timeout,

    /// The resource does not exist (HTTP 404)
    NotFound,

    /// Any other non-success HTTP status
    Status(u16),

    /// The response body could not be decoded into the expected shape
    Decode(String),

    /// The configured base URL cannot be joined with an endpoint path
    InvalidUrl(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "error-api-network",
            ApiError::Timeout => "error-api-timeout",
            ApiError::NotFound => "error-api-not-found",
            ApiError::Status(_) => "error-api-status",
            ApiError::Decode(_) => "error-api-decode",
            ApiError::InvalidUrl(_) => "error-api-invalid-url",
        }
    }

    /// Maps an HTTP status code to an error, `None` for success codes.
    pub fn from_status(status: reqwest::StatusCode) -> Option<Self> {
        if status.is_success() {
            None
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Some(ApiError::NotFound)
        } else {
            Some(ApiError::Status(status.as_u16()))
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::NotFound => write!(f, "Resource not found"),
            ApiError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            ApiError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
            ApiError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ApiError::Timeout;
        }
        if let Some(status) = err.status() {
            if let Some(api_error) = ApiError::from_status(status) {
                return api_error;
            }
        }
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        if err.is_builder() {
            return ApiError::InvalidUrl(err.to_string());
        }
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
