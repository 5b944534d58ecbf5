//! Shared error types for the library

use thiserror::Error;

/// Main error type for dddmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A field or method of an artifact is missing a mandatory attribute
    #[error("Malformed artifact {path}: {reason}")]
    MalformedArtifact { path: String, reason: String },

    /// Two artifacts share the same fully-qualified path
    #[error("Duplicate artifact: {0}")]
    DuplicateArtifact(String),

    /// An artifact names a parent module that has not been declared
    #[error("Artifact {path} names unknown parent module {parent}")]
    UnknownParent { path: String, parent: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a malformed-artifact error for the artifact at `path`
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedArtifact {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether the error was caused by the input model rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedArtifact { .. } | Self::DuplicateArtifact(_) | Self::UnknownParent { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_error_names_artifact_path() {
        let error = Error::malformed("com.acme.domain.Order", "field with empty name");
        assert_eq!(
            error.to_string(),
            "Malformed artifact com.acme.domain.Order: field with empty name"
        );
        assert!(error.is_input_error());
    }

    #[test]
    fn io_errors_are_not_input_errors() {
        let error: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(!error.is_input_error());
        assert_eq!(error.to_string(), "missing");
    }

    #[test]
    fn unknown_parent_formats_both_paths() {
        let error = Error::UnknownParent {
            path: "a.b.C".to_string(),
            parent: "a.b".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Artifact a.b.C names unknown parent module a.b"
        );
    }
}
