//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Build command for the resistorgen-cli binary (finds it in target/debug when run via cargo test).
fn resistorgen_cli() -> Command {
    cargo_bin_cmd!("resistorgen-cli")
}

/// Path to resistorgen library test fixtures (relative to workspace).
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("resistorgen")
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_cli_help() {
    let mut cmd = resistorgen_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("E24"));
}

#[test]
fn test_cli_version() {
    let mut cmd = resistorgen_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_series() {
    let output = resistorgen_cli().arg("series").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 169);
    assert_eq!(lines[0], "1");
    assert_eq!(lines[1], "1.1");
    assert_eq!(lines[168], "10000000");
}

#[test]
fn test_cli_series_json() {
    let mut cmd = resistorgen_cli();

    cmd.arg("series").arg("--format").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 169"));
}

#[test]
fn test_cli_encode() {
    let mut cmd = resistorgen_cli();

    cmd.arg("encode").arg("4700");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("4K7"))
        .stdout(predicate::str::contains("Yellow"))
        .stdout(predicate::str::contains("Violet"))
        .stdout(predicate::str::contains(
            "Resistor_4K7_OnePercentTolerance.step",
        ));
}

#[test]
fn test_cli_encode_json_with_tolerance() {
    let output = resistorgen_cli()
        .arg("encode")
        .arg("100")
        .arg("--tolerance")
        .arg("2")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["label"], "100R");
    assert_eq!(json["file_name"], "Resistor_100R_TwoPercentTolerance.step");
    let colors: Vec<&str> = json["bands"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["color"].as_str().unwrap())
        .collect();
    assert_eq!(colors, vec!["Brown", "Black", "Black", "Black", "Red"]);
}

#[test]
fn test_cli_encode_out_of_range() {
    let mut cmd = resistorgen_cli();

    cmd.arg("encode").arg("0.5");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_encode_unsupported_tolerance() {
    let mut cmd = resistorgen_cli();

    cmd.arg("encode").arg("100").arg("--tolerance").arg("3");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported tolerance"));
}

#[test]
fn test_cli_tolerances() {
    let mut cmd = resistorgen_cli();

    cmd.arg("tolerances");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OnePercentTolerance"))
        .stdout(predicate::str::contains("TenthPercentTolerance"))
        .stdout(predicate::str::contains("Violet"));
}

#[test]
fn test_cli_generate_single_value() {
    let out = tempfile::tempdir().unwrap();
    let mut cmd = resistorgen_cli();

    cmd.arg("generate")
        .arg("--template")
        .arg(fixtures_dir().join("template.step"))
        .arg("--output")
        .arg(out.path())
        .arg("--value")
        .arg("100")
        .arg("--tolerance")
        .arg("2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generated: 1"));

    let path = out.path().join("Resistor_100R_TwoPercentTolerance.step");
    let content = std::fs::read_to_string(path).unwrap();
    assert!(!content.contains("{{BAND_"));
}

#[test]
fn test_cli_generate_whole_series() {
    let out = tempfile::tempdir().unwrap();
    let mut cmd = resistorgen_cli();

    cmd.arg("generate")
        .arg("-t")
        .arg(fixtures_dir().join("template.step"))
        .arg("-o")
        .arg(out.path());

    cmd.assert().success();
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 169);
}

#[test]
fn test_cli_generate_json_report() {
    let out = tempfile::tempdir().unwrap();
    let output = resistorgen_cli()
        .arg("generate")
        .arg("--template")
        .arg(fixtures_dir().join("template.step"))
        .arg("--output")
        .arg(out.path())
        .arg("--value")
        .arg("4700")
        .arg("--value")
        .arg("47000")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["artifacts"].as_array().unwrap().len(), 2);
    assert_eq!(json["artifacts"][1]["label"], "47K");
}

#[test]
fn test_cli_generate_missing_template() {
    let out = tempfile::tempdir().unwrap();
    let mut cmd = resistorgen_cli();

    cmd.arg("generate")
        .arg("--template")
        .arg("does_not_exist.step")
        .arg("--output")
        .arg(out.path());

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read template"));
}

#[test]
fn test_cli_generate_strict_mode() {
    let out = tempfile::tempdir().unwrap();
    let mut cmd = resistorgen_cli();

    cmd.arg("generate")
        .arg("--template")
        .arg(fixtures_dir().join("partial_template.step"))
        .arg("--output")
        .arg(out.path())
        .arg("--value")
        .arg("100")
        .arg("--strict");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("FAILED"));
}

#[test]
fn test_cli_generate_exit_codes() {
    let out = tempfile::tempdir().unwrap();

    let mut cmd = resistorgen_cli();
    cmd.arg("generate")
        .arg("--template")
        .arg(fixtures_dir().join("template.step"))
        .arg("--output")
        .arg(out.path())
        .arg("--value")
        .arg("100");
    cmd.assert().code(0);

    let mut cmd = resistorgen_cli();
    cmd.arg("generate")
        .arg("--template")
        .arg(fixtures_dir().join("template.step"))
        .arg("--output")
        .arg(out.path())
        .arg("--value")
        .arg("0.5")
        .arg("--fail-fast");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Domain error"));
}
