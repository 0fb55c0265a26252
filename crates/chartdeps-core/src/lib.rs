//! Chartdeps Core - dependency extraction for Helm charts
//!
//! This crate turns the text of a `Chart.yaml` into a list of dependency
//! records that an update pipeline can look up in a Helm repository:
//! - `ChartDescriptor`: A validated `apiVersion: v2` chart
//! - `ValidDependency`: A dependency entry with a name and a version
//! - `RepositoryReference`: How a `repository` field should be resolved
//! - `PackageFile`: The extraction result, tagged with the `helm` datasource
//!
//! ## Example
//!
//! ```rust
//! use chartdeps_core::{extract_package_file, ExtractConfig, SkipReason};
//!
//! let content = r#"
//! apiVersion: v2
//! name: my-app
//! version: 1.0.0
//! dependencies:
//!   - name: redis
//!     version: 17.0.0
//!     repository: "@bitnami"
//!   - name: common
//!     version: 2.0.0
//!     repository: file:///charts/common
//! "#;
//!
//! let config = ExtractConfig::new().with_alias("bitnami", "https://charts.bitnami.com/bitnami");
//! let file = extract_package_file(content, "Chart.yaml", &config).unwrap();
//!
//! assert_eq!(file.deps[0].registry_urls, vec!["https://charts.bitnami.com/bitnami"]);
//! assert_eq!(file.deps[1].skip_reason, Some(SkipReason::LocalDependency));
//! ```

pub mod chart;
pub mod config;
pub mod dependency;
pub mod error;
pub mod extract;
pub mod reference;

pub use chart::{ChartDescriptor, SUPPORTED_API_VERSION};
pub use config::ExtractConfig;
pub use dependency::{RawDependency, ValidDependency, filter_dependencies};
pub use error::{ExtractError, Result};
pub use extract::{
    DATASOURCE, PackageDependency, PackageFile, extract_package_file,
    extract_package_file_from_path, try_extract_package_file,
};
pub use reference::{RepositoryReference, SkipReason, classify_dependency};
