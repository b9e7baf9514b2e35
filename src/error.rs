//! Custom error types for Releasedit with typed failure categories.

use thiserror::Error;

/// Main error type for Releasedit operations.
#[derive(Error, Debug)]
pub enum ReleaseditError {
    // Input errors
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Failed to read release body file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Forge errors
    #[error("No release found for tag: {0}")]
    NotFound(String),

    #[error("Forge API error: {0}")]
    RemoteApi(String),

    // Step output errors
    #[error("Failed to write step outputs: {0}")]
    Output(#[from] std::io::Error),

    #[error("Logger initialization error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Result type alias using ReleaseditError
pub type Result<T> = std::result::Result<T, ReleaseditError>;

impl ReleaseditError {
    /// Create a validation error with context
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a remote api error with context
    pub fn remote_api(msg: impl Into<String>) -> Self {
        Self::RemoteApi(msg.into())
    }

    /// Create a file read error for a body path
    pub fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}

// Implement From for octocrab errors (GitHub API). Not-found lookups are
// mapped to NotFound at the call site where the tag is known.
impl From<octocrab::Error> for ReleaseditError {
    fn from(err: octocrab::Error) -> Self {
        Self::RemoteApi(format!("GitHub API error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = ReleaseditError::validation("tag_name input is required");
        assert_eq!(
            err.to_string(),
            "Invalid input: tag_name input is required"
        );

        let err = ReleaseditError::NotFound("v1.0.0".into());
        assert_eq!(err.to_string(), "No release found for tag: v1.0.0");

        let err = ReleaseditError::remote_api("boom");
        assert_eq!(err.to_string(), "Forge API error: boom");
    }

    #[test]
    fn test_error_helpers() {
        let err = ReleaseditError::validation("missing field");
        assert!(matches!(err, ReleaseditError::Validation(_)));

        let io_err =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ReleaseditError::file_read("notes.md", io_err);
        assert!(matches!(err, ReleaseditError::FileRead { .. }));
        assert!(err.to_string().contains("notes.md"));
    }
}
