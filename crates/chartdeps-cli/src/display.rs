//! Display formatting for CLI output

use chartdeps_core::PackageDependency;
use console::style;

use crate::commands::extract::ChartReport;

/// Print extraction results as a human-readable listing
pub fn print_reports(reports: &[ChartReport]) {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }

        let Some(file) = &report.result else {
            println!("{} {}", style("→").blue(), report.file);
            println!("  {} no dependencies found", style("⚠").yellow());
            continue;
        };

        println!(
            "{} {} ({} datasource)",
            style("→").blue(),
            report.file,
            file.datasource
        );
        for dep in &file.deps {
            println!("  {}", format_dependency(dep));
        }

        let skipped = file.skipped().count();
        if skipped > 0 {
            println!(
                "  {}",
                style(format!("{} of {} dependencies skipped", skipped, file.deps.len())).dim()
            );
        }
    }
}

fn format_dependency(dep: &PackageDependency) -> String {
    match (&dep.skip_reason, dep.registry_urls.first()) {
        (None, Some(url)) => format!(
            "{} {} @ {} {}",
            style("✓").green(),
            style(&dep.dep_name).bold(),
            dep.current_value,
            style(url).cyan()
        ),
        (Some(reason), _) => format!(
            "{} {} @ {} [{}]",
            style("⚠").yellow(),
            style(&dep.dep_name).bold(),
            dep.current_value,
            style(reason).yellow()
        ),
        (None, None) => format!(
            "{} {} @ {}",
            style("?").dim(),
            style(&dep.dep_name).bold(),
            dep.current_value
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartdeps_core::SkipReason;

    #[test]
    fn test_format_dependency() {
        console::set_colors_enabled(false);

        let resolved =
            PackageDependency::new("redis", "17.0.0").with_registry_url("https://charts.example.com");
        assert_eq!(
            format_dependency(&resolved),
            "✓ redis @ 17.0.0 https://charts.example.com"
        );

        let skipped = PackageDependency::new("common", "2.0.0").skipped(SkipReason::LocalDependency);
        assert_eq!(
            format_dependency(&skipped),
            "⚠ common @ 2.0.0 [local-dependency]"
        );
    }
}
