//! Integration tests for CLI commands

use std::process::Command;

/// Helper to run chartdeps command
fn chartdeps(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_chartdeps"))
        .args(args)
        .env_remove("CHARTDEPS_ALIASES")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute chartdeps")
}

/// Get the fixtures path
fn fixtures_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures")
}

fn fixture(name: &str) -> String {
    format!("{}/{}", fixtures_path(), name)
}

mod extract_command {
    use super::*;

    #[test]
    fn test_extract_json_output() {
        let output = chartdeps(&[
            "extract",
            &fixture("demo-chart"),
            "--aliases",
            &fixture("aliases.yaml"),
            "--output",
            "json",
        ]);

        assert!(output.status.success(), "Expected success for demo chart");
        let stdout = String::from_utf8_lossy(&output.stdout);
        let json: serde_json::Value =
            serde_json::from_str(&stdout).expect("Output should be valid JSON");

        let result = &json[0]["result"];
        assert_eq!(result["datasource"], "helm");

        let deps = result["deps"].as_array().unwrap();
        let names: Vec<_> = deps.iter().map(|d| d["depName"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec!["postgresql", "redis", "memcached", "common", "nginx", "vendored"]
        );

        assert_eq!(deps[0]["registryUrls"][0], "https://charts.bitnami.com/bitnami");
        assert_eq!(deps[1]["registryUrls"][0], "https://charts.example.com");
        assert_eq!(deps[2]["skipReason"], "placeholder-url");
        assert_eq!(deps[3]["skipReason"], "local-dependency");
        assert_eq!(deps[4]["skipReason"], "invalid-url");
        assert_eq!(deps[5]["skipReason"], "no-repository");
    }

    #[test]
    fn test_extract_alias_flag() {
        let output = chartdeps(&[
            "extract",
            &fixture("demo-chart/Chart.yaml"),
            "--alias",
            "unknown=https://charts.unknown.example.com",
            "-o",
            "json",
        ]);

        assert!(output.status.success());
        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
        let deps = &json[0]["result"]["deps"];

        // myrepo is not configured without the aliases file
        assert_eq!(deps[1]["skipReason"], "placeholder-url");
        assert_eq!(deps[2]["registryUrls"][0], "https://charts.unknown.example.com");
    }

    #[test]
    fn test_extract_rejected_chart_is_null() {
        let output = chartdeps(&["extract", &fixture("no-deps-chart"), "--output", "json"]);

        assert!(output.status.success());
        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
        assert!(json[0]["result"].is_null());
    }

    #[test]
    fn test_extract_strict_rejects() {
        let output = chartdeps(&["extract", &fixture("legacy-chart"), "--strict"]);

        assert_eq!(output.status.code(), Some(4));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("apiVersion"));
    }

    #[test]
    fn test_extract_multiple_charts() {
        let output = chartdeps(&[
            "extract",
            &fixture("demo-chart"),
            &fixture("legacy-chart"),
            "--output",
            "yaml",
        ]);

        assert!(output.status.success());
        let yaml: serde_json::Value = serde_yaml_to_json(&output.stdout);
        assert_eq!(yaml.as_array().unwrap().len(), 2);
        assert!(yaml[1]["result"].is_null());
    }

    #[test]
    fn test_extract_table_output() {
        let output = chartdeps(&[
            "extract",
            &fixture("demo-chart"),
            &fixture("no-deps-chart"),
            "--aliases",
            &fixture("aliases.yaml"),
        ]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("postgresql"));
        assert!(stdout.contains("local-dependency"));
        assert!(stdout.contains("no dependencies found"));
    }

    #[test]
    fn test_extract_missing_file() {
        let output = chartdeps(&["extract", &fixture("does-not-exist/Chart.yaml")]);

        assert_eq!(output.status.code(), Some(5));
    }

    #[test]
    fn test_extract_bad_alias_file() {
        let output = chartdeps(&[
            "extract",
            &fixture("demo-chart"),
            "--aliases",
            &fixture("bad-aliases.yaml"),
        ]);

        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_extract_bad_alias_flag() {
        let output = chartdeps(&["extract", &fixture("demo-chart"), "--alias", "no-equals"]);

        assert!(!output.status.success());
    }

    fn serde_yaml_to_json(bytes: &[u8]) -> serde_json::Value {
        serde_yaml::from_slice(bytes).expect("Output should be valid YAML")
    }
}
