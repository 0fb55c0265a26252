//! Repository reference classification
//!
//! A dependency's `repository` field is one of:
//! - **Alias**: `@name`, resolved through the configured aliases
//! - **URL**: any absolute URL, fetched as a Helm repository
//! - **Local**: a `file://` URL, which cannot be looked up remotely
//!
//! Anything else is an invalid reference.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ExtractConfig;
use crate::dependency::ValidDependency;
use crate::extract::PackageDependency;

/// Prefix marking a repository reference as an alias
const ALIAS_MARKER: char = '@';

/// URL scheme of local chart directories
const LOCAL_SCHEME: &str = "file";

/// Reason why a dependency cannot be looked up in a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// No `repository` field
    NoRepository,
    /// `@alias` with no configured URL
    PlaceholderUrl,
    /// `repository` is not an absolute URL
    InvalidUrl,
    /// `repository` points at the local filesystem
    LocalDependency,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRepository => write!(f, "no-repository"),
            Self::PlaceholderUrl => write!(f, "placeholder-url"),
            Self::InvalidUrl => write!(f, "invalid-url"),
            Self::LocalDependency => write!(f, "local-dependency"),
        }
    }
}

/// A parsed `repository` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryReference<'a> {
    /// `@name`, with the marker stripped
    Alias(&'a str),
    /// Absolute URL with a remote scheme
    Url(Url),
    /// `file://` URL
    Local(Url),
    /// Not parseable as an absolute URL
    Invalid(url::ParseError),
}

impl<'a> RepositoryReference<'a> {
    /// Classify a non-empty repository string
    pub fn parse(repository: &'a str) -> Self {
        if let Some(alias) = repository.strip_prefix(ALIAS_MARKER) {
            return Self::Alias(alias);
        }

        match Url::parse(repository) {
            Ok(url) if url.scheme() == LOCAL_SCHEME => Self::Local(url),
            Ok(url) => Self::Url(url),
            Err(e) => Self::Invalid(e),
        }
    }
}

/// Build the output record for one dependency
///
/// An alias that resolves is returned as-is without any URL checks on the
/// configured value. Literal references are returned verbatim when they parse.
pub fn classify_dependency(dep: &ValidDependency, config: &ExtractConfig) -> PackageDependency {
    let record = PackageDependency::new(&dep.name, &dep.version);

    let Some(repository) = dep.repository() else {
        return record.skipped(SkipReason::NoRepository);
    };

    match RepositoryReference::parse(repository) {
        RepositoryReference::Alias(alias) => match config.alias(alias) {
            Some(url) => record.with_registry_url(url),
            None => record.skipped(SkipReason::PlaceholderUrl),
        },
        RepositoryReference::Local(_) => record.skipped(SkipReason::LocalDependency),
        RepositoryReference::Url(_) => record.with_registry_url(repository),
        RepositoryReference::Invalid(err) => {
            tracing::debug!(%err, repository, "Error parsing url");
            record.skipped(SkipReason::InvalidUrl)
        }
    }
}
