use std::fmt;

use gallery_api::ApiError;

/// Application-level errors outside the admin forms
#[derive(Debug)]
pub enum AppError {
    /// Backend or configuration error
    Api(ApiError),
    /// Reading a picked file failed
    Filesystem(std::io::Error),
    /// Required input missing
    Validation(String),
    /// No native file dialog on this platform
    PlatformNotSupported(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "API error: {}", e),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::PlatformNotSupported(msg) => write!(f, "Platform not supported: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Api(e) => Some(e),
            AppError::Filesystem(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Io(io) => AppError::Filesystem(io),
            other => AppError::Api(other),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

/// Short text for inline error lines
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(ApiError::InvalidConfig(msg)) => format!("Invalid configuration: {}", msg),
            AppError::Api(_) => "Could not reach the gallery server.".to_string(),
            AppError::Filesystem(_) => "Could not read the selected file.".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::PlatformNotSupported(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_stay_filesystem_errors() {
        let api = ApiError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let app: AppError = api.into();
        assert!(matches!(app, AppError::Filesystem(_)));
        assert_eq!(app.user_message(), "Could not read the selected file.");
    }

    #[test]
    fn test_user_messages() {
        let status = AppError::from(ApiError::Status {
            status: 503,
            url: "https://x/api/events".to_string(),
        });
        assert_eq!(status.user_message(), "Could not reach the gallery server.");
        assert!(status.to_string().contains("503"));

        let config = AppError::from(ApiError::InvalidConfig("bad url".to_string()));
        assert_eq!(config.user_message(), "Invalid configuration: bad url");
    }
}
