use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Failure codes produced by the request layer itself.
///
/// Backend domain codes are passed through untouched and never collide
/// with these.
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const SERVER_ERROR: &str = "SERVER_ERROR";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
}

/// Error object carried by a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// `{success, data?, error?}` envelope returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }

    /// Collapse the envelope into a `Result`.
    ///
    /// A response without `success` but also without an `error` object is
    /// reported as `SERVER_ERROR`.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.success {
            return Ok(self.data);
        }
        Err(self
            .error
            .unwrap_or_else(|| ApiError::new(codes::SERVER_ERROR, "Request was not successful")))
    }

    /// Like [`into_result`](Self::into_result) but treats a missing `data`
    /// field as a server error.
    pub fn into_data(self) -> Result<T, ApiError> {
        match self.into_result()? {
            Some(data) => Ok(data),
            None => Err(ApiError::new(
                codes::SERVER_ERROR,
                "Response did not contain any data",
            )),
        }
    }

    /// Human readable failure message, if the response failed.
    pub fn error_message(&self) -> Option<&str> {
        if self.success {
            return None;
        }
        Some(
            self.error
                .as_ref()
                .map(|e| e.message.as_str())
                .unwrap_or("Request was not successful"),
        )
    }
}
