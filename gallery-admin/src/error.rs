use gallery_api::ApiError;

/// Why an admin action did not go through
#[derive(Debug)]
pub enum AdminError {
    /// A required field or selection was missing; nothing was sent
    Precondition(&'static str),
    /// The backend call failed
    Remote(ApiError),
}

impl std::fmt::Display for AdminError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminError::Precondition(msg) => write!(f, "Precondition failed: {}", msg),
            AdminError::Remote(e) => write!(f, "Remote operation failed: {}", e),
        }
    }
}

impl std::error::Error for AdminError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdminError::Precondition(_) => None,
            AdminError::Remote(e) => Some(e),
        }
    }
}

impl From<ApiError> for AdminError {
    fn from(err: ApiError) -> Self {
        AdminError::Remote(err)
    }
}

impl AdminError {
    /// Text shown in the form. Remote failures collapse into one generic line per action.
    pub fn user_message(&self, remote_failure: &str) -> String {
        match self {
            AdminError::Precondition(msg) => msg.to_string(),
            AdminError::Remote(_) => remote_failure.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_remote_detail() {
        let remote = AdminError::from(ApiError::Status {
            status: 503,
            url: "https://api.test/events".to_string(),
        });
        assert_eq!(remote.user_message("Failed to upload event."), "Failed to upload event.");
        assert!(remote.to_string().contains("503"));

        let missing = AdminError::Precondition("Missing data.");
        assert_eq!(missing.user_message("unused"), "Missing data.");
    }
}
