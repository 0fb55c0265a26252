//! Extract command - list chart dependencies

use chartdeps_core::{ExtractConfig, PackageFile, extract_package_file_from_path};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::OutputFormat;
use crate::display;
use crate::error::{CliError, Result};

/// Extraction result for one chart
#[derive(Debug, Serialize)]
pub struct ChartReport {
    pub file: String,
    pub result: Option<PackageFile>,
}

pub fn run(
    charts: &[PathBuf],
    aliases_file: Option<&Path>,
    aliases: &[(String, String)],
    output: OutputFormat,
    strict: bool,
) -> Result<()> {
    let config = load_config(aliases_file, aliases)?;

    let reports = charts
        .iter()
        .map(|chart| extract_chart(chart, &config, strict))
        .collect::<Result<Vec<_>>>()?;

    match output {
        OutputFormat::Table => display::print_reports(&reports),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&reports)?),
    }

    Ok(())
}

/// Parse an `--alias NAME=URL` value
pub fn parse_alias(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, url)) if !name.is_empty() && !url.is_empty() => {
            Ok((name.to_string(), url.to_string()))
        }
        _ => Err(format!("expected NAME=URL, got '{}'", s)),
    }
}

fn load_config(aliases_file: Option<&Path>, aliases: &[(String, String)]) -> Result<ExtractConfig> {
    let config = match aliases_file {
        Some(path) => ExtractConfig::load_from(path).map_err(|e| {
            CliError::config_with_help(
                e.to_string(),
                "The aliases file maps names to URLs under an `aliases:` key",
            )
        })?,
        None => ExtractConfig::new(),
    };

    Ok(aliases
        .iter()
        .fold(config, |config, (name, url)| config.with_alias(name, url)))
}

/// Locate the Chart.yaml for a path that may be a chart directory
fn chart_file(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join("Chart.yaml")
    } else {
        path.to_path_buf()
    }
}

fn extract_chart(path: &Path, config: &ExtractConfig, strict: bool) -> Result<ChartReport> {
    let path = chart_file(path);
    let file = path.display().to_string();

    let result = match extract_package_file_from_path(&path, config) {
        Ok(package_file) => Some(package_file),
        Err(err) if !strict && err.is_rejection() => {
            tracing::debug!(file_name = %file, "{}", err);
            None
        }
        Err(err) => return Err(CliError::extract(&file, err)),
    };

    Ok(ChartReport { file, result })
}
