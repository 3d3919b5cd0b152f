//! Integration tests for failure handling: non-zero exit, diagnostics, no partial output

use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_pocket2bookmark(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pocket2bookmark"))
        .args(args)
        .output()
        .expect("Failed to execute pocket2bookmark")
}

#[test]
fn test_malformed_row_exits_non_zero() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("pocket.csv");
    fs::write(&input, "title,url,time_added,tags\nA,http://a,1,\nB,http://b\n").unwrap();
    let output = dir.path().join("bookmarks.html");

    let result = run_pocket2bookmark(&[input.to_str().unwrap(), output.to_str().unwrap()]);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Row 2"), "stderr: {}", stderr);
    assert!(!output.exists(), "no output should be written on failure");
}

#[test]
fn test_existing_output_untouched_on_failure() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("pocket.csv");
    fs::write(&input, "title,url,time_added,tags\nshort\n").unwrap();
    let output = dir.path().join("bookmarks.html");
    fs::write(&output, "previous export").unwrap();

    let result = run_pocket2bookmark(&[input.to_str().unwrap(), output.to_str().unwrap()]);

    assert!(!result.status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous export");
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("does-not-exist.csv");

    let result = run_pocket2bookmark(&[input.to_str().unwrap()]);

    assert!(!result.status.success());
    assert!(result.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("does-not-exist.csv"), "stderr: {}", stderr);
}

#[test]
fn test_input_over_memory_limit() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("pocket.csv");
    fs::write(&input, "a,b,c,d\n".repeat(1000)).unwrap();

    let result = run_pocket2bookmark(&[input.to_str().unwrap(), "--memory-limit", "2KB"]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("--memory-limit"), "stderr: {}", stderr);
}

#[test]
fn test_multi_character_separator_rejected() {
    let result = run_pocket2bookmark(&["--separator", "||"]);
    assert!(!result.status.success());
}

#[test]
fn test_help_mentions_separator() {
    let result = run_pocket2bookmark(&["--help"]);
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("--separator"));
    assert!(stdout.contains("Pocket CSV"));
}
