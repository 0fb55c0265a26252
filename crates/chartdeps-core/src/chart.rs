//! Chart.yaml schema validation
//!
//! A `ChartDescriptor` only exists for charts that carry `apiVersion`, `name`
//! and `version`, and whose `apiVersion` is the supported one.

use serde_yaml::Value;

use crate::dependency::RawDependency;
use crate::error::{ExtractError, Result};

/// The only chart API version dependencies are extracted from
pub const SUPPORTED_API_VERSION: &str = "v2";

/// Validated top-level fields of a Helm chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDescriptor {
    /// API version (always `v2`)
    pub api_version: String,

    /// Chart name
    pub name: String,

    /// Chart version
    pub version: String,

    /// Dependency entries as written, `None` when the field is absent or not a list
    pub dependencies: Option<Vec<RawDependency>>,
}

impl ChartDescriptor {
    /// Parse and validate a Chart.yaml string
    pub fn parse(content: &str) -> Result<Self> {
        Self::validate(serde_yaml::from_str(content))
    }

    /// Validate the output of the YAML parser
    ///
    /// Checks run in order: the three required fields must be present and
    /// non-empty, then `apiVersion` must be `v2`. `<<` merge keys are
    /// resolved first.
    pub fn validate(manifest: std::result::Result<Value, serde_yaml::Error>) -> Result<Self> {
        let mut manifest = manifest?;
        manifest.apply_merge()?;

        let (Some(api_version), Some(name), Some(version)) = (
            required_field(&manifest, "apiVersion"),
            required_field(&manifest, "name"),
            required_field(&manifest, "version"),
        ) else {
            return Err(ExtractError::MissingRequiredFields);
        };

        if api_version != SUPPORTED_API_VERSION {
            return Err(ExtractError::UnsupportedApiVersion { found: api_version });
        }

        let dependencies = match manifest.get("dependencies") {
            Some(Value::Sequence(entries)) => {
                Some(entries.iter().map(RawDependency::from_value).collect())
            }
            _ => None,
        };

        Ok(Self {
            api_version,
            name,
            version,
            dependencies,
        })
    }
}

/// Read a top-level scalar that must be present and truthy
fn required_field(manifest: &Value, key: &str) -> Option<String> {
    manifest
        .get(key)
        .filter(|value| is_truthy(value))
        .and_then(scalar_text)
}

/// Loose presence check: null, false, zero and "" all count as missing
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) => true,
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        _ => None,
    }
}
