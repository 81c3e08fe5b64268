use serde::Deserialize;
use thiserror::Error;

/// Error surface for every REST call the frontend makes.
///
/// `Status` carries the HTTP status together with the `error` message the API
/// puts in failure bodies; everything that never reached the server lands in
/// `Network`, and unparseable success bodies land in `Decode`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status for server-side failures, `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Failure body shape used across the SkillsHub APIs.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Status {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_unauthorized());
        assert!(ApiError::Network("offline".to_string()).status().is_none());
    }

    #[test]
    fn test_display_carries_message() {
        let err = ApiError::Status {
            status: 401,
            message: "token expired".to_string(),
        };
        assert!(err.to_string().contains("token expired"));
        assert!(err.is_unauthorized());
    }
}
