//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file not found
    FileNotFound(String),
    /// Configuration file could not be used
    ConfigError(String),
    /// Command-line arguments are inconsistent
    InvalidArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("build.log".to_string());
        assert_eq!(error.to_string(), "File not found: build.log");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown field `colour`".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown field `colour`");
    }

    #[test]
    fn test_invalid_argument_display() {
        let error = CliError::InvalidArgument("Chunk size must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid argument: Chunk size must be greater than 0"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::FileNotFound("x".to_string()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "File not found: x");
    }

    #[test]
    fn test_error_with_non_ascii_path() {
        let error = CliError::FileNotFound("ログ/build 日志.txt".to_string());
        assert_eq!(error.to_string(), "File not found: ログ/build 日志.txt");
    }
}
