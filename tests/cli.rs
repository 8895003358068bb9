use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("guess-quiz").unwrap()
}

fn sample_quiz() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("quiz.json")
}

fn write_quiz(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("quiz.json");
    fs::write(&path, contents).expect("write fixture quiz");
    path
}

#[test]
fn check_sample_quiz() {
    cmd()
        .arg("--questions")
        .arg(sample_quiz())
        .arg("--check")
        .assert()
        .success()
        .stdout(contains("Test Quiz"))
        .stdout(contains("questions:  4"))
        .stdout(contains("answers:    11"))
        .stdout(contains("hints:      5"))
        .stdout(contains("max points: 110"))
        .stdout(contains(" 2. What are the names of Avery's guinea pigs? (2 answers, 3 hints)"));
}

#[test]
fn check_uses_default_path() {
    let dir = TempDir::new().expect("create temp dir");
    write_quiz(
        &dir,
        r#"{ "title": "Pets", "questions": [
            { "content": "Name a guinea pig", "solutions": [{ "canonicalName": "Nash" }] }
        ] }"#,
    );

    cmd()
        .current_dir(dir.path())
        .arg("--check")
        .assert()
        .success()
        .stdout(contains("Pets"))
        .stdout(contains("max points: 10"));
}

#[test]
fn check_rejects_missing_canonical_name() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_quiz(
        &dir,
        r#"{ "title": "Broken", "questions": [
            { "content": "?", "solutions": [{ "alternatives": ["x"] }] }
        ] }"#,
    );

    cmd()
        .arg("-q")
        .arg(&path)
        .arg("--check")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("canonicalName"));
}

#[test]
fn check_rejects_duplicate_solutions() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_quiz(
        &dir,
        r#"{ "title": "Broken", "questions": [
            { "content": "?",
              "solutions": [{ "canonicalName": "Nash" }, { "canonicalName": "NASH" }] }
        ] }"#,
    );

    cmd()
        .args(["--check", "-q"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("question #1 is malformed"));
}

#[test]
fn missing_file_fails() {
    cmd()
        .args(["--check", "-q", "no/such/quiz.json"])
        .assert()
        .failure()
        .stderr(contains("no/such/quiz.json"));
}

#[test]
fn verbose_check_logs_to_stderr() {
    cmd()
        .arg("--questions")
        .arg(sample_quiz())
        .args(["--check", "-v"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(contains("loaded quiz document"))
        .stdout(contains("loaded quiz document").not());
}

#[test]
fn log_file_receives_events() {
    let dir = TempDir::new().expect("create temp dir");
    let log = dir.path().join("quiz.log");

    cmd()
        .arg("--questions")
        .arg(sample_quiz())
        .args(["--check", "-vv", "--log-file"])
        .arg(&log)
        .env_remove("RUST_LOG")
        .assert()
        .success();

    let written = fs::read_to_string(&log).expect("read log file");
    assert!(written.contains("quiz document is valid"));
}
