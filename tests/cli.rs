//! CLI behavior tests: exit codes, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const VEGAN_PAGE: &str = "test-content/vegan-baking.html";
const SHORT_NOTE: &str = "test-content/short-note.txt";

fn seoscope_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seoscope"));
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn analyzes_file_with_console_report() {
    let mut cmd = seoscope_cmd();
    cmd.arg(VEGAN_PAGE).arg("--keywords").arg("vegan, baking");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SEO Content Analysis"))
        .stdout(predicate::str::contains("Target keywords: vegan, baking"))
        .stdout(predicate::str::contains("vegan"))
        .stdout(predicate::str::contains("Competitors:").not());
}

#[test]
fn reads_stdin_when_no_path() {
    let mut cmd = seoscope_cmd();
    cmd.arg("--json").arg("-k").arg("seo");
    cmd.write_stdin("SEO SEO seo content content strategy");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["source"], "own");
    assert_eq!(value["keywordDensity"]["value"], 0.5);
    assert_eq!(value["wordCount"]["value"], 6);
}

#[test]
fn dash_reads_stdin() {
    let mut cmd = seoscope_cmd();
    cmd.arg("-").arg("--quiet");
    cmd.write_stdin("plain words here");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("own: "));
}

#[test]
fn json_output_valid() {
    let mut cmd = seoscope_cmd();
    cmd.arg(VEGAN_PAGE).arg("--json").arg("--keywords").arg("vegan");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert!(value["seoScore"].is_number());
    assert_eq!(value["suggestedKeywords"][0]["keyword"], "vegan");
    assert!(value["recommendations"].as_array().unwrap().len() >= 3);
}

#[test]
fn below_min_score_exit_1() {
    let mut cmd = seoscope_cmd();
    cmd.arg(SHORT_NOTE).arg("--min-score").arg("1000");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("below minimum"));
}

#[test]
fn above_min_score_exit_0() {
    let mut cmd = seoscope_cmd();
    cmd.arg(SHORT_NOTE).arg("--min-score").arg("-1000");
    cmd.assert().success();
}

#[test]
fn file_not_found_exit_2() {
    let mut cmd = seoscope_cmd();
    cmd.arg("nonexistent.txt");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn no_competitors_flag_skips_aggregation() {
    let mut cmd = seoscope_cmd();
    cmd.arg(SHORT_NOTE)
        .arg("--niche")
        .arg("vegan baking")
        .arg("--no-competitors")
        .arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value.get("competitors").is_none());
}

#[test]
fn unreachable_search_degrades_every_slot() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("offline.json");
    // Port 9 (discard) refuses connections on a normal host
    fs::write(
        &config,
        r#"{
            "competitors": { "slots": ["Rival1", "Rival2"] },
            "http": { "searchUrl": "http://127.0.0.1:9/html/", "timeoutSecs": 2 }
        }"#,
    )
    .unwrap();

    let mut cmd = seoscope_cmd();
    cmd.arg(SHORT_NOTE)
        .arg("--niche")
        .arg("seo")
        .arg("--json")
        .arg("--config")
        .arg(&config);
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let insights = value["competitors"]["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0]["query"], "Rival1 seo");
    assert!(insights.iter().all(|i| i["status"] == "Unreachable"));
    assert_eq!(value["competitors"]["aggregated"].as_array().unwrap().len(), 0);
}

#[test]
fn config_top_k_limits_suggestions() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("custom.json");
    fs::write(&config, r#"{ "topK": 2 }"#).unwrap();

    let mut cmd = seoscope_cmd();
    cmd.arg(VEGAN_PAGE).arg("--json").arg("--config").arg(&config);
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["suggestedKeywords"].as_array().unwrap().len(), 2);
}

#[test]
fn cli_top_k_overrides_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("custom.json");
    fs::write(&config, r#"{ "topK": 2 }"#).unwrap();

    let mut cmd = seoscope_cmd();
    cmd.arg(VEGAN_PAGE)
        .arg("--json")
        .arg("--config")
        .arg(&config)
        .arg("--top-k")
        .arg("4");
    let output = cmd.output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["suggestedKeywords"].as_array().unwrap().len(), 4);
}

#[test]
fn missing_config_file_exit_2() {
    let mut cmd = seoscope_cmd();
    cmd.arg(SHORT_NOTE).arg("--config").arg("does-not-exist.json");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn url_conflicts_with_path() {
    let mut cmd = seoscope_cmd();
    cmd.arg(SHORT_NOTE).arg("--url").arg("https://example.com");
    cmd.assert().failure().code(2);
}

#[test]
fn invalid_url_exit_2() {
    let mut cmd = seoscope_cmd();
    cmd.arg("--url").arg("not a url");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to scrape"));
}

#[test]
fn init_creates_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".seoscoperc.json");
    let mut cmd = seoscope_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path()).arg("--min-score").arg("4.5");
    cmd.assert().success();
    assert!(config_path.exists(), ".seoscoperc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["minScore"], 4.5);
    assert_eq!(value["topK"], 5);
    assert_eq!(value["competitors"]["slots"][2], "Competitor3");
}

#[test]
fn init_accepts_negative_min_score() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = seoscope_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path()).arg("--min-score").arg("-2.5");
    cmd.assert().success();
    let content = fs::read_to_string(dir.path().join(".seoscoperc.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["minScore"], -2.5);
}

#[test]
fn init_existing_config_warns() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".seoscoperc.json");
    fs::write(&config_path, "{}").unwrap();
    let mut cmd = seoscope_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path());
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "{}");
}

#[test]
fn found_config_in_input_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join(".seoscoperc.json"), r#"{ "minScore": 1000 }"#).unwrap();
    let input = dir.path().join("post.txt");
    fs::write(&input, "Some post about gardening and gardening tools.").unwrap();

    let mut cmd = seoscope_cmd();
    cmd.arg(&input).arg("--quiet");
    cmd.assert().failure().code(1);
}
