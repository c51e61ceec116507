//! End-to-end tests for the evvgas binary

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

fn evvgas() -> Command {
    Command::cargo_bin("evvgas").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_compute_defaults() {
    let out = stdout_of(evvgas().arg("compute"));

    assert!(out.contains("Total Cost per Mile:   $0.0517"));
    assert!(out.contains("Total Cost per Mile:   $0.1500"));
    assert!(out.ends_with("EV is cheaper by $0.0983 per mile.\n"));
}

#[test]
fn test_compute_phev_half_split() {
    let out = stdout_of(evvgas().args(["compute", "--phev-gas-percentage", "50"]));

    assert!(out.contains("Blended Cost per Mile: $0.0967"));
    assert!(out.contains("Total Cost per Mile:   $0.1050"));
}

#[test]
fn test_compute_invalid_input_recovers() {
    let out = stdout_of(evvgas().args(["compute", "--mpg", "0", "--annual-miles", "abc", "--format", "json"]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["inputs"]["mpg"], 1.0);
    assert_eq!(json["inputs"]["annualMiles"], 1.0);
    assert_eq!(json["metrics"]["gasFuelCostPerMile"], 3.5);
}

#[test]
fn test_compute_subnormal_divisor() {
    let out = stdout_of(evvgas().args(["compute", "--variant", "phev", "--mpg", "1e-320", "--annual"]));

    assert!(!out.contains("NaN"), "{out}");
    assert!(out.contains("Fuel Cost per Mile:    $2.9900"));
    assert!(out.ends_with("PHEV is cheaper by $2.9674 per mile.\n"), "{out}");
}

#[test]
fn test_compute_annual() {
    let out = stdout_of(evvgas().args(["compute", "--annual"]));
    assert!(out.contains("Annual Cost"));
    assert!(out.contains("$1800"));
}

#[test]
fn test_compute_with_parameter_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "variant": "phev", "phevGasPercentage": 150 }"#)
        .unwrap();

    let out = stdout_of(evvgas().args(["compute", "--format", "json", "--params"]).arg(file.path()));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["variant"], "phev");
    assert_eq!(json["inputs"]["phevGasPercentage"], 100.0);
    assert_eq!(json["inputs"]["evRoadTax"], 140.0);
}

#[test]
fn test_bad_parameter_file_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "insurance": 900 }"#).unwrap();

    let output = evvgas()
        .args(["compute", "--params"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown field: 'insurance'"), "stderr: {stderr}");
}

#[test]
fn test_schema_is_json() {
    let out = stdout_of(evvgas().arg("schema"));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["version"], "1.0");
    assert_eq!(json["cost_types"].as_array().unwrap().len(), 20);
}

#[test]
fn test_fields_listing() {
    let out = stdout_of(evvgas().args(["fields", "--variant", "phev"]));
    assert!(out.starts_with("Fields (phev defaults)"));
    assert!(out.contains("--phev-gas-percentage"));
    assert!(out.contains("Gas Car"));
    assert!(out.contains("Shared"));
}
