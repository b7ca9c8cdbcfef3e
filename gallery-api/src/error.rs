/// Error type for gallery API operations
#[derive(Debug)]
pub enum ApiError {
    /// Transport failure (connect, TLS, request build)
    Network(reqwest::Error),
    /// Server answered with a non-2xx status
    Status { status: u16, url: String },
    /// Response body did not match the expected entity shape
    Decode(serde_json::Error),
    /// Local file could not be read
    Io(std::io::Error),
    /// Configuration is unusable
    InvalidConfig(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Status { status, url } => {
                write!(f, "Server returned status {} for {}", status, url)
            }
            ApiError::Decode(e) => write!(f, "Invalid response body: {}", e),
            ApiError::Io(e) => write!(f, "IO error: {}", e),
            ApiError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e) => Some(e),
            ApiError::Decode(e) => Some(e),
            ApiError::Io(e) => Some(e),
            ApiError::Status { .. } | ApiError::InvalidConfig(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Io(err)
    }
}

/// Result type for gallery API operations
pub type ApiResult<T> = Result<T, ApiError>;
