//! CLI error types with exit code handling
//!
//! This module provides a unified error type for CLI operations that
//! maps errors to appropriate exit codes.

use chartdeps_core::ExtractError;
use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// Alias configuration could not be loaded or parsed
    #[error("Configuration error: {message}")]
    #[diagnostic(code(chartdeps::cli::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Chart.yaml was read but yields no dependencies (strict mode)
    #[error("{file}: {message}")]
    #[diagnostic(
        code(chartdeps::cli::chart),
        help("Run without --strict to treat this chart as having no dependencies")
    )]
    Rejected { file: String, message: String },

    /// IO error (file not found, permissions, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(chartdeps::cli::io))]
    Io { message: String },

    /// Result could not be written out
    #[error("Output error: {message}")]
    #[diagnostic(code(chartdeps::cli::output))]
    Output { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config { .. } => exit_codes::CONFIG_ERROR,
            CliError::Rejected { .. } => exit_codes::CHART_ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
            CliError::Output { .. } => exit_codes::ERROR,
        }
    }

    /// Create a configuration error with help text
    pub fn config_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Convert an extraction error for the chart at `file`
    pub fn extract(file: &str, err: ExtractError) -> Self {
        match err {
            ExtractError::Io(e) => Self::Io {
                message: format!("{}: {}", file, e),
            },
            ExtractError::Config { message } => Self::Config {
                message,
                help: None,
            },
            other => Self::Rejected {
                file: file.to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Output {
            message: err.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let rejected = CliError::extract("Chart.yaml", ExtractError::NoDependencies);
        assert_eq!(rejected.exit_code(), exit_codes::CHART_ERROR);
        assert_eq!(rejected.to_string(), "Chart.yaml: Chart has no dependencies");

        let io = CliError::extract(
            "Chart.yaml",
            ExtractError::Io(std::io::Error::from(std::io::ErrorKind::NotFound)),
        );
        assert_eq!(io.exit_code(), exit_codes::IO_ERROR);

        let config = CliError::config_with_help("bad alias", "use NAME=URL");
        assert_eq!(config.exit_code(), exit_codes::CONFIG_ERROR);
    }
}
