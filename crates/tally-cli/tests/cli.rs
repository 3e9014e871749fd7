//! End-to-end tests for the `tally` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn tally() -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env_remove("TALLY_Z")
        .env_remove("TALLY_POLICY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_prints_demo_score() {
    tally()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.85365"));
}

#[test]
fn wilson_with_custom_z() {
    tally()
        .args(["wilson", "1", "0", "--z", "1.96"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.2065"));
}

#[test]
fn empty_tally_is_nan_by_default() {
    tally()
        .args(["wilson", "0", "0"])
        .assert()
        .success()
        .stdout("NaN\n");
}

#[test]
fn strict_flag_rejects_empty_tally() {
    tally()
        .args(["wilson", "0", "0", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty sample"));
}

#[test]
fn strict_policy_from_environment() {
    tally()
        .env("TALLY_POLICY", "strict")
        .args(["wilson", "0", "0"])
        .assert()
        .failure();
}

#[test]
fn z_from_environment() {
    tally()
        .env("TALLY_Z", "1.96")
        .args(["wilson", "1", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.2065"));
}

#[test]
fn invalid_z_is_rejected() {
    tally()
        .args(["wilson", "5", "5", "--z", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid z-score"));
}

#[test]
fn interval_as_json() {
    let output = tally()
        .args(["wilson", "100", "10", "--interval", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["score"], "wilson");
    assert_eq!(json["upvotes"], 100);
    let lower = json["value"]["lower"].as_f64().unwrap();
    let upper = json["value"]["upper"].as_f64().unwrap();
    assert!((lower - 0.853660).abs() < 1e-6);
    assert!((upper - 0.944881).abs() < 1e-6);
}

#[test]
fn signed_downvoted_item_is_negative() {
    tally()
        .args(["signed", "0", "10"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-0."));
}

#[test]
fn hot_at_fixed_time() {
    tally()
        .args(["hot", "10", "2", "--created", "2005-12-08T07:46:43Z"])
        .assert()
        .success()
        .stdout("0.90309\n");
}

#[test]
fn negative_counts_are_usage_errors() {
    tally().args(["bayes", "-3", "1"]).assert().failure();
}
