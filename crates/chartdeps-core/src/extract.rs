//! Chart.yaml dependency extraction
//!
//! The pipeline runs parse → validate → filter → classify. Only the first
//! three stages can reject a chart; classification marks individual
//! dependencies with a [`SkipReason`] instead.

use serde::Serialize;
use std::path::Path;

use crate::chart::ChartDescriptor;
use crate::config::ExtractConfig;
use crate::dependency::filter_dependencies;
use crate::error::Result;
use crate::reference::{SkipReason, classify_dependency};

/// Datasource that understands the extracted records
pub const DATASOURCE: &str = "helm";

/// One extracted dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDependency {
    /// Chart name
    pub dep_name: String,

    /// Version constraint as written
    pub current_value: String,

    /// Registry to look the chart up in (at most one)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub registry_urls: Vec<String>,

    /// Why the dependency cannot be looked up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<SkipReason>,
}

impl PackageDependency {
    /// Create an unclassified record
    pub fn new(dep_name: impl Into<String>, current_value: impl Into<String>) -> Self {
        Self {
            dep_name: dep_name.into(),
            current_value: current_value.into(),
            registry_urls: Vec::new(),
            skip_reason: None,
        }
    }

    /// Resolve to a registry URL
    pub fn with_registry_url(mut self, url: impl Into<String>) -> Self {
        self.registry_urls = vec![url.into()];
        self.skip_reason = None;
        self
    }

    /// Mark as not resolvable
    pub fn skipped(mut self, reason: SkipReason) -> Self {
        self.registry_urls.clear();
        self.skip_reason = Some(reason);
        self
    }

    /// Check if the dependency can be looked up
    pub fn is_resolvable(&self) -> bool {
        self.skip_reason.is_none() && !self.registry_urls.is_empty()
    }
}

/// Dependencies extracted from one chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageFile {
    pub deps: Vec<PackageDependency>,
    pub datasource: &'static str,
}

impl PackageFile {
    /// Wrap classified dependencies with the helm datasource
    pub fn new(deps: Vec<PackageDependency>) -> Self {
        Self {
            deps,
            datasource: DATASOURCE,
        }
    }

    /// Records that were given a skip reason
    pub fn skipped(&self) -> impl Iterator<Item = &PackageDependency> {
        self.deps.iter().filter(|d| d.skip_reason.is_some())
    }
}

/// Extract dependencies from Chart.yaml content
///
/// Never fails: a chart that cannot be used is logged at debug level and
/// yields `None`. `file_name` is only used in diagnostics.
pub fn extract_package_file(
    content: &str,
    file_name: &str,
    config: &ExtractConfig,
) -> Option<PackageFile> {
    match try_extract_package_file(content, file_name, config) {
        Ok(file) => Some(file),
        Err(err) => {
            tracing::debug!(file_name, "{}", err);
            None
        }
    }
}

/// Extract dependencies, reporting why a chart was rejected
pub fn try_extract_package_file(
    content: &str,
    file_name: &str,
    config: &ExtractConfig,
) -> Result<PackageFile> {
    let chart = ChartDescriptor::validate(serde_yaml::from_str(content))?;
    let valid = filter_dependencies(&chart)?;

    tracing::trace!(
        file_name,
        chart = %chart.name,
        count = valid.len(),
        "Classifying dependencies"
    );

    let deps = valid
        .iter()
        .map(|dep| classify_dependency(dep, config))
        .collect();

    Ok(PackageFile::new(deps))
}

/// Read a Chart.yaml from disk and extract its dependencies
pub fn extract_package_file_from_path(path: &Path, config: &ExtractConfig) -> Result<PackageFile> {
    let content = std::fs::read_to_string(path)?;
    try_extract_package_file(&content, &path.display().to_string(), config)
}
