//! Crate-level error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the scheduler, metrics, and history layers.
///
/// Every failure is deterministic; nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A request token could not be read as an integer cylinder.
    #[error("invalid request value: {token}")]
    Parse { token: String },
    /// The algorithm selector does not name a known policy.
    #[error("unknown algorithm: {0}")]
    InvalidAlgorithm(String),
    /// The direction selector is neither `left` nor `right`.
    #[error("unknown direction: {0}")]
    InvalidDirection(String),
    /// Seek time per cylinder must be finite and non-negative.
    #[error("invalid seek time per cylinder: {0} ms")]
    InvalidSeekTime(f64),
    /// Total head movement does not fit in a `Cylinder`.
    #[error("total head movement exceeds {}", i64::MAX)]
    MovementOverflow,
    /// Run inputs failed validation.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// A history table could not be read back.
    #[error("malformed history export at record {record}: {message}")]
    Export { record: usize, message: String },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_parse_error_names_token() {
        let err = Error::Parse {
            token: "12a".into(),
        };
        assert_eq!(err.to_string(), "invalid request value: 12a");
    }

    #[test]
    fn test_invalid_input_joins_messages() {
        let err = Error::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::InvertedBounds, "first"),
            ValidationError::new(ValidationErrorKind::HeadOutOfBounds, "second"),
        ]);
        assert_eq!(err.to_string(), "invalid input: first; second");
    }

    #[test]
    fn test_movement_overflow_message() {
        assert_eq!(
            Error::MovementOverflow.to_string(),
            "total head movement exceeds 9223372036854775807"
        );
    }
}
