//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched the input patterns
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Some inputs could not be scored
    ScoringFailed {
        /// Inputs that failed
        failed: usize,
        /// All inputs
        total: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(pattern) => {
                write!(f, "No files found matching the provided patterns: {pattern}")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ScoringFailed { failed, total } => {
                write!(f, "Scoring failed for {failed} of {total} inputs")
            }
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
        let error = CliError::FileNotFound("*.txt".to_string());
        assert_eq!(
            error.to_string(),
            "No files found matching the provided patterns: *.txt"
        );
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_scoring_failed_display() {
        let error = CliError::ScoringFailed {
            failed: 1,
            total: 3,
        };
        assert_eq!(error.to_string(), "Scoring failed for 1 of 3 inputs");
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::ConfigError("bad".to_string()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("Übersicht/größe *.txt".to_string());
        assert!(error.to_string().ends_with("Übersicht/größe *.txt"));
    }
}
