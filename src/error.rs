use thiserror::Error;

/// Unified error type for autover operations
#[derive(Error, Debug)]
pub enum AutoverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Version store error: {0}")]
    Store(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in autover
pub type Result<T> = std::result::Result<T, AutoverError>;

impl AutoverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutoverError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        AutoverError::Version(msg.into())
    }

    /// Create a version store error with context
    pub fn store(msg: impl Into<String>) -> Self {
        AutoverError::Store(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        AutoverError::Remote(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AutoverError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AutoverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(AutoverError::version("test").to_string().contains("Version"));
        assert!(AutoverError::store("test").to_string().contains("store"));
        assert!(AutoverError::remote("test").to_string().contains("Remote"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (AutoverError::config("x"), "Configuration error"),
            (AutoverError::version("x"), "Version parsing error"),
            (AutoverError::store("x"), "Version store error"),
            (AutoverError::remote("x"), "Remote operation failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
