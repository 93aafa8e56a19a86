//! Integration tests for the wstf CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn wstf() -> Command {
    let mut cmd = Command::cargo_bin("wstf").unwrap();
    cmd.env_remove("WSTF_VARIANT");
    cmd
}

#[test]
fn test_score_german_file() {
    let mut cmd = wstf();
    cmd.arg("score")
        .arg("-i")
        .arg(fixture_path("german-sample.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("german-sample.txt: WSTF1 = -0.94"))
        .stdout(predicate::str::contains("(sentences: 2, words: 6)"));
}

#[test]
fn test_score_text_argument_with_variants() {
    for (variant, expected) in [
        ("WSTF1", "WSTF1 = -0.94"),
        ("wstf2", "WSTF2 = 0.01"),
        ("3", "WSTF3 = -0.54"),
        ("WSTF4", "WSTF4 = -0.90"),
    ] {
        wstf()
            .args(["score", "-t", "Der Hund läuft. Die Katze schläft.", "--variant", variant])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("<text>: {expected}")));
    }
}

#[test]
fn test_score_from_stdin() {
    wstf()
        .arg("score")
        .write_stdin("Der Hund läuft. Die Katze schläft.")
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>: WSTF1 = -0.94"));
}

#[test]
fn test_variant_from_environment() {
    wstf()
        .env("WSTF_VARIANT", "WSTF3")
        .args(["score", "-t", "Der Hund läuft."])
        .assert()
        .success()
        .stdout(predicate::str::contains("WSTF3"));
}

#[test]
fn test_invalid_variant() {
    wstf()
        .args(["score", "-t", "Der Hund läuft.", "--variant", "WSTF5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown formula variant 'WSTF5'"));
}

#[test]
fn test_unknown_language() {
    wstf()
        .args(["score", "-t", "The dog runs.", "-l", "en"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language code: en"));
}

#[test]
fn test_language_alias() {
    wstf()
        .args(["score", "-t", "Der Hund läuft.", "-l", "deutsch"])
        .assert()
        .success();
}

#[test]
fn test_json_output() {
    let output = wstf()
        .args(["score", "-f", "json", "-i"])
        .arg(fixture_path("german-sample.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entry = &value[0];
    assert_eq!(entry["variant"], "WSTF1");
    assert_eq!(entry["counts"]["sentences"], 2);
    assert_eq!(entry["counts"]["words"], 6);
    assert_eq!(entry["counts"]["long_words"], 1);
    assert_eq!(entry["metrics"]["sl"], 3.0);
}

#[test]
fn test_markdown_output() {
    wstf()
        .args(["score", "-f", "markdown", "-i"])
        .arg(fixture_path("official-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("| Input | Variant | Score |"))
        .stdout(predicate::str::contains("| 3 |"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Scored 1 of 1 inputs*"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("scores.txt");

    wstf()
        .arg("score")
        .arg("-i")
        .arg(fixture_path("german-sample.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("WSTF1 = -0.94"));
}

#[test]
fn test_glob_pattern_in_parallel() {
    wstf()
        .args(["score", "--parallel", "--threads", "2", "-q", "-i"])
        .arg(fixture_path("*-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("german-sample.txt"))
        .stdout(predicate::str::contains("official-sample.txt"));
}

#[test]
fn test_empty_input_fails_but_reports_others() {
    wstf()
        .args(["score", "-q", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("empty.txt: error: no words found"))
        .stdout(predicate::str::contains("german-sample.txt: WSTF1"))
        .stderr(predicate::str::contains("Scoring failed for 1 of 3 inputs"));
}

#[test]
fn test_zero_threads_rejected() {
    wstf()
        .args(["score", "--parallel", "--threads", "0", "-i"])
        .arg(fixture_path("*-sample.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be greater than 0"));
}

#[test]
fn test_invalid_file() {
    wstf()
        .args(["score", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_config_file_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("wstf.toml");
    fs::write(
        &config,
        "[scoring]\nvariant = \"WSTF4\"\n\n[output]\nformat = \"json\"\npretty_json = false\n",
    )
    .unwrap();

    wstf()
        .args(["score", "-t", "Der Hund läuft.", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"source\":\"<text>\",\"variant\":\"WSTF4\""));

    // Flags win over the file
    wstf()
        .args(["score", "-t", "Der Hund läuft.", "-f", "text", "--variant", "2", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("<text>: WSTF2"));
}

#[test]
fn test_help_command() {
    wstf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wiener Sachtextformel"));
}

#[test]
fn test_list_languages() {
    wstf()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("de"))
        .stdout(predicate::str::contains("German"));
}

#[test]
fn test_list_variants() {
    wstf()
        .args(["list", "variants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WSTF1"))
        .stdout(predicate::str::contains("0.2656*SL + 0.2744*MS - 1.693"));
}
