//! Error types for the mtrand library.

use std::fmt;

/// Errors produced during entropy gathering.
///
/// The MT19937 engine itself cannot fail once constructed: all arithmetic
/// is wrapping by design and the state cursor is kept in bounds
/// algorithmically. The only failure point in the crate is the single OS
/// call that the auto-seeding path makes to the system random source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntropyError {
    /// The operating system's random source failed to produce bytes.
    ///
    /// Fatal for the construction attempt: no generator is returned and
    /// the call is not retried.
    SourceFailed,
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::SourceFailed => {
                write!(f, "OS random source failed to produce entropy bytes")
            }
        }
    }
}

impl std::error::Error for EntropyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_source_failed() {
        let err = EntropyError::SourceFailed;
        assert_eq!(
            format!("{}", err),
            "OS random source failed to produce entropy bytes"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(EntropyError::SourceFailed, EntropyError::SourceFailed);
    }

    #[test]
    fn test_error_clone() {
        let err = EntropyError::SourceFailed;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(EntropyError::SourceFailed);
        assert!(err.source().is_none());
    }
}
