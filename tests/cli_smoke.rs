use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/analysis.json")
}

fn ghdash() -> Command {
    let mut cmd = Command::cargo_bin("ghdash").unwrap();
    cmd.env_remove("GHDASH_ENDPOINT").env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn heat_json_outputs_buckets() {
    let v = json_stdout(ghdash().arg("--input").arg(fixture()).args(["heat", "--json"]));

    assert_eq!(v["version"], 1);
    assert_eq!(v["username"], "octocat");
    assert_eq!(v["time_frames"], 10);
    assert_eq!(v["policy"], "sample");

    let buckets = v["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 5);
    assert_eq!(buckets[0]["start_date"], "2024-01-01");
    assert_eq!(buckets[0]["dominant_language"], "Python");
    assert_eq!(buckets[0]["color"], "#FF0000");
    assert_eq!(buckets[1]["dominant_language"], "Rust");
    assert_eq!(buckets[1]["color"], "#808080");
    assert_eq!(buckets[2]["color"], "#808080");
    assert_eq!(buckets[3]["commit_height_fraction"], 1.0);
    assert_eq!(buckets[3]["pr_height_fraction"], 1.0);
    assert_eq!(buckets[1]["pr_height_fraction"], 0.5);
    for bucket in buckets {
        let f = bucket["commit_height_fraction"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&f));
    }
}

#[test]
fn heat_respects_time_frames_and_policy() {
    let v = json_stdout(
        ghdash()
            .arg("--input")
            .arg(fixture())
            .args(["--time-frames", "2", "--policy", "sum", "heat", "--json"]),
    );
    let buckets = v["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0]["start_date"], "2024-01-01");
    assert_eq!(buckets[0]["end_date"], "2024-01-03");
    assert_eq!(buckets[0]["total_commits"], 6);
    assert_eq!(buckets[1]["total_commits"], 9);
    assert_eq!(buckets[1]["dominant_language"], "TypeScript");
}

#[test]
fn heat_ndjson_emits_one_line_per_bucket() {
    let out = ghdash()
        .arg("--input")
        .arg(fixture())
        .args(["heat", "--ndjson"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("color").is_some());
    }
}

#[test]
fn empty_heatmap_prints_no_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, r#"{"heatmap_data": {}}"#).unwrap();

    let out = ghdash()
        .arg("--input")
        .arg(&path)
        .arg("heat")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8(out).unwrap().contains("No data to display"));
}

#[test]
fn custom_palette_recolors_buckets() {
    let dir = tempdir().unwrap();
    let palette = dir.path().join("palette.json");
    fs::write(
        &palette,
        r##"{"languages": [{"name": "Rust", "color": "#DEA584"}], "other": "#000000"}"##,
    )
    .unwrap();

    let v = json_stdout(
        ghdash()
            .arg("--input")
            .arg(fixture())
            .arg("--palette")
            .arg(&palette)
            .args(["heat", "--json"]),
    );
    let buckets = v["buckets"].as_array().unwrap();
    assert_eq!(buckets[0]["color"], "#000000");
    assert_eq!(buckets[1]["color"], "#DEA584");
}

#[test]
fn profile_and_repo_cards() {
    let profile = json_stdout(ghdash().arg("--input").arg(fixture()).args(["profile", "--json"]));
    assert_eq!(profile["username"], "octocat");
    assert_eq!(profile["bio"], "No bio available");
    assert_eq!(profile["years_on_github"], 6);

    let repos = json_stdout(ghdash().arg("--input").arg(fixture()).args(["repo", "--json"]));
    let repos = repos.as_array().unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0]["quality"], "Good");
    assert_eq!(repos[0]["narrative"].as_array().unwrap().len(), 2);
}

#[test]
fn dashboard_text_output() {
    let out = ghdash()
        .arg("--input")
        .arg(fixture())
        .arg("dashboard")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("octocat"));
    assert!(text.contains("hello-world Score: Good"));
    assert!(text.contains("Contribution Heatmap"));
}

#[test]
fn missing_username_fails_before_request() {
    let out = ghdash()
        .args(["heat", "--json"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8(out).unwrap().contains("Username is required"));
}

#[test]
fn malformed_input_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    ghdash()
        .arg("--input")
        .arg(&path)
        .args(["heat", "--json"])
        .assert()
        .failure();
}

#[test]
fn profile_without_user_profile_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("analysis.json");
    fs::write(&input, r#"{"heatmap_data": {}}"#).unwrap();

    let out = ghdash()
        .arg("--input")
        .arg(&input)
        .arg("profile")
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&out).contains("Analysis payload has no user profile"));
}

#[test]
fn bad_heatmap_row_does_not_break_other_cards() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("analysis.json");
    fs::write(
        &input,
        r#"{"user_profile": {"username": "octocat"},
            "heatmap_data": {"2024-01-01": {"total_commits": 2}, "2024-01-02": {"languages": {"Rust": 1}}}}"#,
    )
    .unwrap();

    let profile = json_stdout(ghdash().arg("--input").arg(&input).args(["profile", "--json"]));
    assert_eq!(profile["username"], "octocat");

    let heat = json_stdout(ghdash().arg("--input").arg(&input).args(["heat", "--json"]));
    assert_eq!(heat["buckets"].as_array().unwrap().len(), 1);
}
