//! Runs the scorer binary end to end.

use std::process::Command;

use hate_scorer_domain::Subtask;
use hate_scorer_testing::{random_labels, with_wrong_labels, TsvFixture};

fn scorer() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hate-scorer"));
    cmd.env_remove("RUST_LOG").env("SCORER_LOG_LEVEL", "info");
    cmd
}

#[test]
fn test_plain_summary_on_stdout() {
    let fixture = TsvFixture::new().unwrap();
    let gold = random_labels(Subtask::HateType, 10);
    let gold_path = fixture.write_gold("gold_subtask_1A.tsv", &gold).unwrap();
    let pred_path = fixture
        .write_predictions("run_subtask_1A.tsv", &with_wrong_labels(&gold, 5))
        .unwrap();

    let output = scorer()
        .arg("-p")
        .arg(&pred_path)
        .arg("-g")
        .arg(&gold_path)
        .args(["--format", "plain", "--no-color"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Accuracy=0.5000\t"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("All files exist!"));
    assert!(stderr.contains("Scoring run:"));
}

#[test]
fn test_missing_gold_exits_with_failure() {
    let fixture = TsvFixture::new().unwrap();
    let pred_path = fixture
        .write_predictions("run_subtask_1B.tsv", &random_labels(Subtask::HateTarget, 3))
        .unwrap();

    let status = scorer()
        .arg("--pred_files_path")
        .arg(&pred_path)
        .arg("--gold_file_path")
        .arg(fixture.path("missing_subtask_1B.tsv"))
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_rejected_prediction_does_not_fail_run() {
    let fixture = TsvFixture::new().unwrap();
    let gold = random_labels(Subtask::MultiLabel, 4);
    let gold_path = fixture.write_gold("gold_subtask_1C.tsv", &gold).unwrap();
    let good = fixture.write_predictions("good_subtask_1C.tsv", &gold).unwrap();
    let bad = fixture
        .write_raw("bad_subtask_1C.tsv", "id\thate_type\tmodel\n1\tNone\tBERT\n")
        .unwrap();

    let output = scorer()
        .arg("-p")
        .arg(&good)
        .arg(&bad)
        .arg("-g")
        .arg(&gold_path)
        .args(["-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["files"][0]["status"], "scored");
    assert_eq!(summary["files"][0]["report"]["metrics"]["f1"], 1.0);
    assert_eq!(summary["files"][1]["status"], "skipped");
}

#[test]
fn test_invalid_config_exits_with_failure() {
    let fixture = TsvFixture::new().unwrap();
    let config = fixture.write_raw("scorer.toml", "decimals = 99\n").unwrap();
    let gold = random_labels(Subtask::HateType, 2);

    let status = scorer()
        .arg("-p")
        .arg(fixture.write_predictions("run_subtask_1A.tsv", &gold).unwrap())
        .arg("-g")
        .arg(fixture.write_gold("gold_subtask_1A.tsv", &gold).unwrap())
        .arg("-c")
        .arg(&config)
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_malformed_gold_exits_with_failure() {
    let fixture = TsvFixture::new().unwrap();
    let pred = random_labels(Subtask::HateType, 2);
    let gold_path = fixture
        .write_raw("gold_subtask_1A.tsv", "id\ttext\tlabel\n1\tNone\n2\tsome text\tNone\n")
        .unwrap();

    let output = scorer()
        .arg("-p")
        .arg(fixture.write_predictions("run_subtask_1A.tsv", &pred).unwrap())
        .arg("-g")
        .arg(&gold_path)
        .arg("--no-color")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Failed to read gold file"));
}
