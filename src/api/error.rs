use thiserror::Error;

use super::envelope::{codes, ApiError};

/// Internal failure of a single request, before it is folded into the
/// response envelope.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The URL built from base URL and path was rejected.
    #[error("Invalid request URL '{url}'")]
    InvalidUrl { url: String },

    /// Connecting, sending or reading the body failed.
    #[error("Connection failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The body was not valid JSON or did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Parse(#[source] serde_json::Error),

    /// Non-2xx status without a backend error object.
    #[error("Server returned status {status}")]
    Status { status: u16, message: Option<String> },

    /// Non-2xx status with a backend error object.
    #[error("Server returned status {status}: {error}")]
    Backend { status: u16, error: ApiError },
}

impl RequestError {
    /// Envelope code for this failure.
    pub fn code(&self) -> &str {
        match self {
            RequestError::InvalidUrl { .. } | RequestError::Network(_) => codes::NETWORK_ERROR,
            RequestError::Parse(_) => codes::PARSE_ERROR,
            RequestError::Status { .. } => codes::SERVER_ERROR,
            RequestError::Backend { error, .. } => &error.code,
        }
    }

    /// Convert into the error object handed to callers.
    pub fn into_api_error(self) -> ApiError {
        match self {
            RequestError::InvalidUrl { .. } | RequestError::Network(_) => {
                ApiError::new(codes::NETWORK_ERROR, "Could not connect to the server")
            }
            RequestError::Parse(_) => {
                ApiError::new(codes::PARSE_ERROR, "The server sent an invalid response")
            }
            RequestError::Status { message, .. } => ApiError::new(
                codes::SERVER_ERROR,
                message.unwrap_or_else(|| "The server encountered an error".to_string()),
            ),
            RequestError::Backend { error, .. } => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_without_message_uses_generic_text() {
        let err = RequestError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.code(), codes::SERVER_ERROR);
        let api = err.into_api_error();
        assert_eq!(api.code, codes::SERVER_ERROR);
        assert_eq!(api.message, "The server encountered an error");
    }

    #[test]
    fn backend_error_keeps_domain_code() {
        let err = RequestError::Backend {
            status: 401,
            error: ApiError::new("INVALID_CREDENTIALS", "Wrong password"),
        };
        assert_eq!(err.code(), "INVALID_CREDENTIALS");
        assert_eq!(err.into_api_error().message, "Wrong password");
    }
}
