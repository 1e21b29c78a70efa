// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for graph construction.

use std::fmt;

use crate::mode::ModeParseError;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Main error type for the graph library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Unrecognized labeling mode or other bad caller input.
    InvalidArgument(String),
    /// Accessor called before any adjacency matrix was computed.
    IllegalState(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::IllegalState(msg) => write!(f, "Illegal state: {msg}"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<ModeParseError> for GraphError {
    fn from(err: ModeParseError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::InvalidArgument("test".to_string());
        assert_eq!(err.to_string(), "Invalid argument: test");

        let err = GraphError::IllegalState("test".to_string());
        assert_eq!(err.to_string(), "Illegal state: test");
    }

    #[test]
    fn test_from_mode_parse_error() {
        let err: GraphError = "bogus".parse::<crate::LabelingMode>().unwrap_err().into();
        assert!(matches!(err, GraphError::InvalidArgument(ref msg) if msg.contains("bogus")));
    }
}
