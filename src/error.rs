//! Error types for statement translation.

use thiserror::Error;

use crate::location::Location;

/// A translation failure, tagged with the location of the offending token
/// or subtree. The first failure aborts the whole statement; there is no
/// partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Source syntax with no target equivalent (CASCADE, LATERAL VIEW,
    /// materialized views, ...).
    #[error("line {location}: {message}")]
    UnsupportedConstruct { message: String, location: Location },

    /// Syntactically valid but semantically disallowed combination
    /// (EXTERNAL without LOCATION, an unknown TBLPROPERTIES key, bad
    /// arity for `if`/`nullif`/`coalesce`).
    #[error("line {location}: {message}")]
    InvalidAttribute { message: String, location: Location },

    /// A literal that cannot be represented under the active policy.
    #[error("line {location}: {message}")]
    InvalidLiteral { message: String, location: Location },

    /// A classifier table lookup failed. This signals a coverage gap in
    /// the mapping tables rather than legitimately unsupported SQL.
    #[error("line {location}: {message}")]
    UnrecognizedMapping { message: String, location: Location },
}

impl TranslateError {
    /// Create an unsupported-construct error.
    pub fn unsupported(message: impl Into<String>, location: Location) -> Self {
        Self::UnsupportedConstruct {
            message: message.into(),
            location,
        }
    }

    /// Create an invalid-attribute error.
    pub fn invalid_attribute(message: impl Into<String>, location: Location) -> Self {
        Self::InvalidAttribute {
            message: message.into(),
            location,
        }
    }

    /// Create an invalid-literal error.
    pub fn invalid_literal(message: impl Into<String>, location: Location) -> Self {
        Self::InvalidLiteral {
            message: message.into(),
            location,
        }
    }

    /// Create an unrecognized-mapping error. Logged on construction since
    /// it indicates a gap in the mapping tables.
    pub fn unmapped(message: impl Into<String>, location: Location) -> Self {
        let message = message.into();
        tracing::warn!(%location, message, "mapping table lookup failed");
        Self::UnrecognizedMapping { message, location }
    }

    /// The location of the offending token or subtree.
    pub fn location(&self) -> Location {
        match self {
            Self::UnsupportedConstruct { location, .. }
            | Self::InvalidAttribute { location, .. }
            | Self::InvalidLiteral { location, .. }
            | Self::UnrecognizedMapping { location, .. } => *location,
        }
    }

    /// The human-readable message, without the location prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::UnsupportedConstruct { message, .. }
            | Self::InvalidAttribute { message, .. }
            | Self::InvalidLiteral { message, .. }
            | Self::UnrecognizedMapping { message, .. } => message,
        }
    }
}

/// Result type alias for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranslateError::unsupported(
            "Unsupported statement: CASCADE",
            Location::new(1, 14),
        );
        assert_eq!(err.to_string(), "line 1:14: Unsupported statement: CASCADE");
        assert_eq!(err.location(), Location::new(1, 14));
        assert_eq!(err.message(), "Unsupported statement: CASCADE");
    }
}
