//! End-to-end CLI tests: scenario file in, JSON report out, exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn write_scenario(dir: &tempfile::TempDir, v: &Value) -> std::path::PathBuf {
    let p = dir.path().join("scenario.json");
    fs::write(&p, v.to_string()).unwrap();
    p
}

fn election() -> Value {
    json!({
        "candidates": [
            {"id": "C1", "name": "Alice", "party": "Blue"},
            {"id": "C2", "name": "Bob", "party": "Green"}
        ],
        "voters": [
            {"id": "V1", "name": "Ann", "age": 25},
            {"id": "V2", "name": "Ben", "age": 40}
        ],
        "votes": [
            {"voterId": "V1", "candidateId": "C2"},
            {"voterId": "V2", "candidateId": "C2"},
            {"voterId": "V2", "candidateId": "C1"}
        ]
    })
}

#[test]
fn prints_report_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(&dir, &election());

    let out = Command::cargo_bin("tally")
        .unwrap()
        .arg("--scenario")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["winner"]["id"], "C2");
    assert_eq!(report["results"][0]["votes"], 2);
    assert_eq!(report["tally"], json!({"C2": 2}));
    assert_eq!(report["rejectedVotes"][0]["reason"], "Voter has already voted");
}

#[test]
fn writes_report_file_with_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(&dir, &election());
    let target = dir.path().join("reports/run.json");

    Command::cargo_bin("tally")
        .unwrap()
        .args(["--sort", "name", "--scenario"])
        .arg(&path)
        .arg("--out")
        .arg(&target)
        .assert()
        .success()
        .stderr(predicate::str::contains("report written"));

    let report: Value = serde_json::from_slice(&fs::read(&target).unwrap()).unwrap();
    assert_eq!(report["results"][0]["name"], "Alice");
}

#[test]
fn missing_scenario_exits_with_validation_code() {
    Command::cargo_bin("tally")
        .unwrap()
        .args(["--scenario", "/no/such/file.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn malformed_scenario_exits_with_validation_code() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("bad.json");
    fs::write(&p, "[1, 2, 3]").unwrap();

    Command::cargo_bin("tally")
        .unwrap()
        .arg("--scenario")
        .arg(&p)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("scenario root must be a JSON object"));
}
