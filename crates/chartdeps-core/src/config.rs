//! Extraction configuration
//!
//! Maps repository aliases (`@name` in Chart.yaml) to registry URLs. The
//! file format is YAML:
//!
//! ```yaml
//! aliases:
//!   bitnami: https://charts.bitnami.com/bitnami
//!   stable: https://charts.helm.sh/stable
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ExtractError, Result};

/// Configuration supplied by the caller of an extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractConfig {
    /// Alias name to registry URL
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl ExtractConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alias, replacing any previous URL for the same name
    pub fn with_alias(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.aliases.insert(name.into(), url.into());
        self
    }

    /// Load configuration from a YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| match e {
            ExtractError::Config { message } => ExtractError::Config {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ExtractError::Config {
            message: e.to_string(),
        })
    }

    /// Registry URL for an alias, looked up verbatim
    ///
    /// An alias configured with an empty URL counts as unset.
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases
            .get(name)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}
