//! Dependency entry filtering
//!
//! Entries are read leniently from the chart: anything that is not a string
//! is treated as absent. Only entries with a non-empty `name` and `version`
//! survive filtering.

use serde_yaml::Value;

use crate::chart::ChartDescriptor;
use crate::error::{ExtractError, Result};

/// A dependency entry exactly as found in Chart.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDependency {
    /// Dependency name
    pub name: Option<String>,

    /// Version constraint
    pub version: Option<String>,

    /// Repository URL or `@alias`
    pub repository: Option<String>,
}

impl RawDependency {
    /// Read an entry from one item of the `dependencies` list
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str).map(String::from);

        Self {
            name: field("name"),
            version: field("version"),
            repository: field("repository"),
        }
    }

    /// Promote to a valid entry when both name and version are non-empty
    pub fn validate(&self) -> Option<ValidDependency> {
        let name = non_empty(self.name.as_deref())?;
        let version = non_empty(self.version.as_deref())?;

        Some(ValidDependency {
            name: name.to_string(),
            version: version.to_string(),
            repository: self.repository.clone(),
        })
    }
}

/// A dependency entry with a non-empty name and version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDependency {
    pub name: String,
    pub version: String,
    pub repository: Option<String>,
}

impl ValidDependency {
    /// Repository reference, `None` when absent or empty
    pub fn repository(&self) -> Option<&str> {
        non_empty(self.repository.as_deref())
    }
}

/// Keep the dependencies that name both a chart and a version
///
/// Order is preserved. Fails when the chart declares no dependencies or
/// when every declared dependency is incomplete.
pub fn filter_dependencies(chart: &ChartDescriptor) -> Result<Vec<ValidDependency>> {
    let deps = match &chart.dependencies {
        Some(deps) if !deps.is_empty() => deps,
        _ => return Err(ExtractError::NoDependencies),
    };

    let valid: Vec<ValidDependency> = deps.iter().filter_map(RawDependency::validate).collect();

    if valid.is_empty() {
        return Err(ExtractError::NoValidDependencies);
    }

    Ok(valid)
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
