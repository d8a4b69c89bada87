//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Session already started")]
    AlreadyStarted,

    #[error("Empty submission")]
    EmptySubmission,

    #[error("Session is awaiting a host reply")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::Busy.to_string(),
            "Session is awaiting a host reply"
        );
        assert_eq!(
            DomainError::AlreadyStarted.to_string(),
            "Session already started"
        );
    }
}
