//! Extraction error types

use thiserror::Error;

/// Reasons a chart yields no extraction result
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to parse helm Chart.yaml: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to find required fields in Chart.yaml")]
    MissingRequiredFields,

    #[error("Unsupported Chart apiVersion '{found}'. Only v2 is supported.")]
    UnsupportedApiVersion { found: String },

    #[error("Chart has no dependencies")]
    NoDependencies,

    #[error("Name and/or version missing for all dependencies")]
    NoValidDependencies,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl ExtractError {
    /// Whether the chart was read but rejected, as opposed to failing to load
    pub fn is_rejection(&self) -> bool {
        !matches!(self, ExtractError::Io(_) | ExtractError::Config { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
