use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// True for 401/403 responses, which mean the stored token is no longer accepted.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_includes_status_and_message() {
        let err = AppError::Http {
            status: 401,
            message: "Missing Authorization Header".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request failed (401): Missing Authorization Header"
        );
    }

    #[test]
    fn is_unauthorized_matches_auth_statuses_only() {
        let http = |status| AppError::Http {
            status,
            message: String::new(),
        };
        assert!(http(401).is_unauthorized());
        assert!(http(403).is_unauthorized());
        assert!(!http(500).is_unauthorized());
        assert!(!AppError::Parse("bad".to_string()).is_unauthorized());
    }
}
