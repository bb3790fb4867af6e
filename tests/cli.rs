//! Integration tests for the `recommend` binary

use std::fs;
use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn recommend() -> Command {
    let mut cmd = cargo_bin_cmd!("recommend");
    cmd.env_remove("RECOMMENDER_DATA")
        .env_remove("RECOMMENDER_TOP")
        .env_remove("RECOMMENDER_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_corpus() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("games.csv");
    fs::write(
        &path,
        "name,genres,categories,steamspy_tags,developer\n\
         Dark Souls III,Action;RPG,Single-player,Souls-like,FromSoftware\n\
         Dark Souls II,Action;RPG,Single-player,Souls-like,FromSoftware\n\
         Farm Sim,Simulation,,,\n\
         Elden Ring,Action;RPG,Single-player;Multi-player,Souls-like;Open World,FromSoftware\n",
    )
    .unwrap();
    (dir, path)
}

#[test]
fn test_help_flag() {
    recommend()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: recommend"))
        .stdout(predicate::str::contains("--data"))
        .stdout(predicate::str::contains("--top"));
}

#[test]
fn test_single_query_text_output() {
    let (_dir, path) = write_corpus();
    recommend()
        .arg("--data")
        .arg(&path)
        .args(["--query", "dark souls", "--top", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing recommendations for : Dark Souls III"))
        .stdout(predicate::str::contains("\t1\tDark Souls II"))
        .stdout(predicate::str::contains("\t3\tElden Ring"))
        .stdout(predicate::str::contains("Farm Sim").not());
}

#[test]
fn test_top_from_env_is_clamped() {
    let (_dir, path) = write_corpus();
    let output = recommend()
        .env("RECOMMENDER_DATA", &path)
        .env("RECOMMENDER_TOP", "0")
        .args(["--query", "elden"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // banner + exactly one row
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_json_output() {
    let (_dir, path) = write_corpus();
    let output = recommend()
        .arg("--data")
        .arg(&path)
        .args(["--query", "farm", "--top", "10", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["query"], "farm");
    assert_eq!(value["matched"]["name"], "Farm Sim");
    assert_eq!(value["recommendations"].as_array().unwrap().len(), 3);
    assert_eq!(value["recommendations"][0]["score"], 0.0);
}

#[test]
fn test_no_match_exit_code_2() {
    let (_dir, path) = write_corpus();
    recommend()
        .arg("--data")
        .arg(&path)
        .args(["--query", "nonexistent title"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "No game found for input: 'nonexistent title'. Try another title.",
        ));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempdir().unwrap();
    recommend()
        .arg("--data")
        .arg(dir.path().join("missing.csv"))
        .args(["--query", "anything"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn test_empty_corpus_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "name,genres\n").unwrap();
    recommend()
        .arg("--data")
        .arg(&path)
        .args(["--query", "anything"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("corpus contains no items"));
}

#[test]
fn test_interactive_loop() {
    let (_dir, path) = write_corpus();
    recommend()
        .arg("--data")
        .arg(&path)
        .args(["--top", "1"])
        .write_stdin("elden\nzelda\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing recommendations for : Elden Ring"))
        .stdout(predicate::str::contains("No game found for input: 'zelda'. Try another title."));
}

#[test]
fn test_stats_flag() {
    let (_dir, path) = write_corpus();
    recommend()
        .arg("--data")
        .arg(&path)
        .args(["--stats", "--query", "elden"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[stats] items=4 vocabulary=8"));
}

#[test]
fn test_non_ascii_delimiter_is_rejected() {
    let (_dir, path) = write_corpus();
    recommend()
        .arg("--data")
        .arg(&path)
        .args(["--delimiter", "§", "--query", "elden"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid delimiter '§'"))
        .stderr(predicate::str::contains("unsupported corpus format").not());
}
