/// End-to-end tests for config file loading and CLI option merging.
///
/// Every test runs the binary inside its own temporary project directory so
/// that auto-discovery of `pip-chill.config.yml` never leaks between tests.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn install(site_packages: &Path, name: &str, version: &str, requirements: &[&str]) {
    let dist_info = site_packages.join(format!("{}-{}.dist-info", name, version));
    fs::create_dir_all(&dist_info).unwrap();

    let mut metadata = format!("Metadata-Version: 2.1\nName: {}\nVersion: {}\n", name, version);
    for requirement in requirements {
        metadata.push_str(&format!("Requires-Dist: {}\n", requirement));
    }
    fs::write(dist_info.join("METADATA"), metadata).unwrap();
}

/// Creates a project directory with a populated `site-packages` inside it
fn create_test_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let site_packages = dir.path().join("site-packages");
    fs::create_dir(&site_packages).unwrap();

    install(&site_packages, "pip", "24.0", &[]);
    install(&site_packages, "black", "24.4.2", &["click>=8.0.0"]);
    install(&site_packages, "click", "8.1.7", &[]);
    install(&site_packages, "httpie", "3.2.2", &["requests>=2.22.0"]);
    install(&site_packages, "requests", "2.31.0", &[]);
    dir
}

fn site_packages(project: &TempDir) -> String {
    project.path().join("site-packages").to_str().unwrap().to_string()
}

fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

// ============================================================================
// Auto-discovery
// ============================================================================

#[test]
fn test_auto_discovered_config_ignore_packages() {
    let project = create_test_project();
    write_config(
        &project.path().join("pip-chill.config.yml"),
        "ignore_packages:\n  - Black\n",
    );

    cargo_bin_cmd!("pip-chill")
        .current_dir(project.path())
        .args(["-p", &site_packages(&project)])
        .assert()
        .success()
        .stdout("click==8.1.7\nhttpie==3.2.2\n");
}

#[test]
fn test_auto_discovered_config_switches() {
    let project = create_test_project();
    write_config(
        &project.path().join("pip-chill.config.yml"),
        "verbose: true\nno_version: true\n",
    );

    cargo_bin_cmd!("pip-chill")
        .current_dir(project.path())
        .args(["-p", &site_packages(&project)])
        .assert()
        .success()
        .stdout(
            "black\n\
             httpie\n\
             # click # Installed as dependency for black\n\
             # requests # Installed as dependency for httpie\n",
        );
}

#[test]
fn test_auto_discovered_config_paths_and_format() {
    let project = create_test_project();
    write_config(
        &project.path().join("pip-chill.config.yml"),
        &format!(
            "format: json\nshow_all: true\npaths:\n  - {}\n",
            site_packages(&project)
        ),
    );

    let output = cargo_bin_cmd!("pip-chill")
        .current_dir(project.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json["distributions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["black", "httpie", "pip"]);
}

// ============================================================================
// Explicit --config
// ============================================================================

#[test]
fn test_explicit_config_path() {
    let project = create_test_project();
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("custom.yml");
    write_config(&config_path, "no_version: true\n");

    cargo_bin_cmd!("pip-chill")
        .current_dir(project.path())
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "-p",
            &site_packages(&project),
        ])
        .assert()
        .success()
        .stdout("black\nhttpie\n");
}

#[test]
fn test_explicit_config_takes_precedence_over_discovery() {
    let project = create_test_project();
    write_config(
        &project.path().join("pip-chill.config.yml"),
        "no_version: true\n",
    );
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("custom.yml");
    write_config(&config_path, "ignore_packages:\n  - httpie\n");

    cargo_bin_cmd!("pip-chill")
        .current_dir(project.path())
        .args([
            "-c",
            config_path.to_str().unwrap(),
            "-p",
            &site_packages(&project),
        ])
        .assert()
        .success()
        .stdout("black==24.4.2\nrequests==2.31.0\n");
}

#[test]
fn test_explicit_config_missing_file() {
    let project = create_test_project();

    cargo_bin_cmd!("pip-chill")
        .current_dir(project.path())
        .args(["--config", "/nonexistent/custom.yml", "-p", &site_packages(&project)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file"));
}

// ============================================================================
// Validation and warnings
// ============================================================================

#[test]
fn test_unknown_field_warns() {
    let project = create_test_project();
    write_config(
        &project.path().join("pip-chill.config.yml"),
        "verbose: false\nexclude_packages:\n  - black\n",
    );

    cargo_bin_cmd!("pip-chill")
        .current_dir(project.path())
        .args(["-p", &site_packages(&project)])
        .assert()
        .success()
        .stdout("black==24.4.2\nhttpie==3.2.2\n")
        .stderr(predicate::str::contains(
            "Unknown config field 'exclude_packages'",
        ));
}

#[test]
fn test_invalid_format_in_config() {
    let project = create_test_project();
    write_config(
        &project.path().join("pip-chill.config.yml"),
        "format: cyclonedx\n",
    );

    cargo_bin_cmd!("pip-chill")
        .current_dir(project.path())
        .args(["-p", &site_packages(&project)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_malformed_yaml() {
    let project = create_test_project();
    write_config(
        &project.path().join("pip-chill.config.yml"),
        "ignore_packages: [[[broken",
    );

    cargo_bin_cmd!("pip-chill")
        .current_dir(project.path())
        .args(["-p", &site_packages(&project)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

// ============================================================================
// Merging with CLI options
// ============================================================================

#[test]
fn test_cli_format_overrides_config() {
    let project = create_test_project();
    write_config(
        &project.path().join("pip-chill.config.yml"),
        "format: json\n",
    );

    cargo_bin_cmd!("pip-chill")
        .current_dir(project.path())
        .args(["-f", "text", "-p", &site_packages(&project)])
        .assert()
        .success()
        .stdout("black==24.4.2\nhttpie==3.2.2\n");
}

#[test]
fn test_cli_switches_combine_with_config() {
    let project = create_test_project();
    write_config(
        &project.path().join("pip-chill.config.yml"),
        "no_version: true\n",
    );

    cargo_bin_cmd!("pip-chill")
        .current_dir(project.path())
        .args(["-v", "-p", &site_packages(&project)])
        .assert()
        .success()
        .stdout(
            "black\n\
             httpie\n\
             # click # Installed as dependency for black\n\
             # requests # Installed as dependency for httpie\n",
        );
}

#[test]
fn test_cli_paths_override_config_paths() {
    let project = create_test_project();
    write_config(
        &project.path().join("pip-chill.config.yml"),
        "paths:\n  - /nonexistent/site-packages\n",
    );

    cargo_bin_cmd!("pip-chill")
        .current_dir(project.path())
        .args(["-p", &site_packages(&project)])
        .assert()
        .success()
        .stdout("black==24.4.2\nhttpie==3.2.2\n");
}
