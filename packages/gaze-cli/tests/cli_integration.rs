use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn gazelab() -> Command {
    Command::cargo_bin("gazelab").unwrap()
}

fn write_run(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut tmp = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    tmp.write_all(body.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

/// Two fixations at (100,100) and (200,200) joined by one transit sample
fn two_fixation_csv() -> String {
    let mut body = String::from("timestamp,x,y,target_x,target_y\n");
    for t in [0, 100, 200, 300] {
        body.push_str(&format!("{},100,100,100,100\n", t));
    }
    body.push_str("400,150,150,150,150\n");
    for t in [500, 600, 700, 800] {
        body.push_str(&format!("{},200,200,200,200\n", t));
    }
    body
}

// =============================================================================
// GENERAL
// =============================================================================

#[test]
fn test_no_args_shows_help() {
    gazelab()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_flag() {
    gazelab()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gazelab"));
}

#[test]
fn test_help_flag() {
    gazelab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eye-movement analysis"));
}

// =============================================================================
// INFO SUBCOMMAND
// =============================================================================

#[test]
fn test_info_subcommand() {
    gazelab()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("gazelab CLI v"))
        .stdout(predicate::str::contains("Fixation threshold"));
}

#[test]
fn test_info_json() {
    let output = gazelab().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let calibration = parsed.get("calibration").unwrap();
    assert_eq!(calibration["fixation_threshold"], 30.0);
    assert_eq!(calibration["saccade_threshold"], 50.0);
    assert_eq!(calibration["min_fixation_duration_ms"], 100);
    assert_eq!(calibration["weights"]["wiggle"], 0.4);
}

// =============================================================================
// VALIDATE SUBCOMMAND
// =============================================================================

#[test]
fn test_validate_nonexistent_file() {
    gazelab()
        .arg("validate")
        .arg("--file")
        .arg("/nonexistent/run.csv")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_validate_unsupported_extension() {
    let tmp = write_run(".xyz", "0,1,1,1,1\n");

    gazelab()
        .arg("validate")
        .arg("--file")
        .arg(tmp.path().to_str().unwrap())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported"));
}

#[test]
fn test_validate_valid_csv() {
    let tmp = write_run(".csv", &two_fixation_csv());

    gazelab()
        .arg("validate")
        .arg("--file")
        .arg(tmp.path().to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"))
        .stdout(predicate::str::contains("9 samples"));
}

#[test]
fn test_validate_unsorted_json_output() {
    let tmp = write_run(
        ".json",
        r#"[
            {"timestamp": 100, "position": {"x": 1, "y": 1}, "targetPosition": {"x": 1, "y": 1}},
            {"timestamp": 50, "position": {"x": 1, "y": 1}, "targetPosition": {"x": 1, "y": 1}}
        ]"#,
    );

    let output = gazelab()
        .arg("validate")
        .arg("--file")
        .arg(tmp.path().to_str().unwrap())
        .arg("--json")
        .assert()
        .failure()
        .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["exists"], true);
    assert_eq!(parsed["supported"], true);
    assert!(parsed["error"].as_str().unwrap().contains("precedes"));
}

// =============================================================================
// ANALYZE SUBCOMMAND
// =============================================================================

#[test]
fn test_analyze_missing_file_arg() {
    gazelab()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--file"));
}

#[test]
fn test_analyze_nonexistent_file() {
    gazelab()
        .arg("analyze")
        .arg("--file")
        .arg("/nonexistent/run.json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_analyze_report() {
    let tmp = write_run(".csv", &two_fixation_csv());

    let output = gazelab()
        .arg("analyze")
        .arg("--file")
        .arg(tmp.path().to_str().unwrap())
        .arg("--quiet")
        .assert()
        .success()
        .code(0);

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert!(parsed.get("id").is_some());
    assert!(parsed.get("createdAt").is_some());
    assert_eq!(parsed["sampleCount"], 9);
    assert_eq!(parsed["durationMs"], 800);

    let result = &parsed["result"];
    assert_eq!(result["fixations"].as_array().unwrap().len(), 2);
    let saccades = result["saccades"].as_array().unwrap();
    assert_eq!(saccades.len(), 1);
    assert_eq!(saccades[0]["startTime"], 300);
    assert_eq!(saccades[0]["endTime"], 500);
    assert_eq!(saccades[0]["duration"], 200);
    assert!(result["riskAssessment"].as_str().unwrap().ends_with("Risk"));
}

#[test]
fn test_analyze_result_only_to_file() {
    let tmp = write_run(".csv", &two_fixation_csv());
    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("result.json");

    gazelab()
        .arg("analyze")
        .arg("--file")
        .arg(tmp.path().to_str().unwrap())
        .arg("--result-only")
        .arg("--compact")
        .arg("-o")
        .arg(out_path.to_str().unwrap())
        .assert()
        .success()
        .stderr(predicate::str::contains("Results written to"));

    let written = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert!(parsed.get("id").is_none());
    assert_eq!(parsed["averageFixationDuration"], 300.0);
}

#[test]
fn test_analyze_empty_json_run_is_low_risk() {
    let tmp = write_run(".json", "[]");

    let output = gazelab()
        .arg("analyze")
        .arg("--file")
        .arg(tmp.path().to_str().unwrap())
        .arg("--result-only")
        .arg("--quiet")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["riskAssessment"], "Low Risk");
    assert_eq!(parsed["wiggleScore"], 0.0);
    assert!(parsed["fixations"].as_array().unwrap().is_empty());
}

#[test]
fn test_analyze_empty_csv_run_matches_empty_json() {
    let tmp = write_run(".csv", "timestamp,x,y,target_x,target_y\n");

    let output = gazelab()
        .arg("analyze")
        .arg("--file")
        .arg(tmp.path().to_str().unwrap())
        .arg("--result-only")
        .arg("--quiet")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["riskAssessment"], "Low Risk");
    assert!(parsed["fixations"].as_array().unwrap().is_empty());
}

// =============================================================================
// BATCH SUBCOMMAND
// =============================================================================

#[test]
fn test_batch_requires_input() {
    gazelab()
        .arg("batch")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must be specified"));
}

#[test]
fn test_batch_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.csv"), two_fixation_csv()).unwrap();
    std::fs::write(dir.path().join("b.csv"), two_fixation_csv()).unwrap();

    gazelab()
        .arg("batch")
        .arg("--glob")
        .arg(format!("{}/*.csv", dir.path().to_str().unwrap()))
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.csv"))
        .stdout(predicate::str::contains("b.csv"));
}

#[test]
fn test_batch_jsonl_stdout() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.csv"), two_fixation_csv()).unwrap();
    std::fs::write(dir.path().join("b.csv"), two_fixation_csv()).unwrap();

    let output = gazelab()
        .arg("batch")
        .arg("--glob")
        .arg(format!("{}/*.csv", dir.path().to_str().unwrap()))
        .arg("--quiet")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(parsed["result"]["saccades"].as_array().unwrap().len(), 1);
    }
}

#[test]
fn test_batch_output_dir_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");
    let run = dir.path().join("session.csv");
    std::fs::write(&run, two_fixation_csv()).unwrap();

    gazelab()
        .env("GAZELAB_OUTPUT_DIR", out_dir.to_str().unwrap())
        .arg("batch")
        .arg("--files")
        .arg(run.to_str().unwrap())
        .arg("--quiet")
        .assert()
        .success();

    assert!(out_dir.join("session_gaze.json").exists());
}
