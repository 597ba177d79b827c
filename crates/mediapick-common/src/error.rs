//! Common error types used throughout mediapick.
//!
//! Classification is total over well-formed input, so the only failure is a
//! file record that cannot be classified because it carries no name.

/// Common error type for mediapick.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A file reference is missing a field an operation requires.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create a new InvalidArgument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("file record has no name");
        assert_eq!(
            err.to_string(),
            "Invalid argument: file record has no name"
        );
    }

    #[test]
    fn test_result_type() {
        fn ok_fn() -> Result<usize> {
            Ok(3)
        }
        assert_eq!(ok_fn().unwrap(), 3);

        fn error_fn() -> Result<usize> {
            Err(Error::invalid_argument("missing name"))
        }
        assert!(matches!(error_fn(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_error_string_into() {
        let err = Error::invalid_argument(String::from("test"));
        assert_eq!(err, Error::invalid_argument("test"));
    }
}
