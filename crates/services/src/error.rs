//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the HTTP API client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// True for 401/403 responses, which the exam gate reports as forbidden.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            ApiError::Status(status)
                if *status == reqwest::StatusCode::UNAUTHORIZED
                    || *status == reqwest::StatusCode::FORBIDDEN
        )
    }
}

/// Errors emitted by `SimulationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimulationError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_statuses_are_recognized() {
        assert!(ApiError::Status(reqwest::StatusCode::UNAUTHORIZED).is_forbidden());
        assert!(ApiError::Status(reqwest::StatusCode::FORBIDDEN).is_forbidden());
        assert!(!ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR).is_forbidden());
        assert!(!ApiError::Status(reqwest::StatusCode::NOT_FOUND).is_forbidden());
    }
}
