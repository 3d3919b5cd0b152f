//! Integration tests for stdin-to-stdout conversion
//!
//! These tests simulate the pipe workflow:
//! - Reading CSV from stdin
//! - Writing the bookmark document to stdout
//! - Keeping diagnostics on stderr

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], stdin_data: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pocket2bookmark"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn pocket2bookmark");

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(stdin_data)
            .expect("Failed to write to stdin");
    }

    child.wait_with_output().expect("Failed to wait on child")
}

#[test]
fn test_basic_stdin_conversion() {
    let input = "title,url,time_added,tags\nMy Site,http://example.com,1690000000,tech|news\n";
    let output = run_with_stdin(&[], input.as_bytes());

    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "unexpected stderr");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n\
<TITLE>Bookmarks</TITLE>\n\
<H1>Bookmarks</H1>\n\
<H2><stdin></H2>\n\
<DL><p>\n\
<DT><A HREF=\"http://example.com\" ADD_DATE=\"1690000000\" TAGS=\"tech,news\">My Site</A>\n\
</DL><p>"
    );
}

#[test]
fn test_dash_means_stdin_and_stdout() {
    let input = "title,url,time_added,tags\nA,http://a,1,\n";
    let output = run_with_stdin(&["-", "-"], input.as_bytes());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(">A</A>"));
}

#[test]
fn test_empty_stdin() {
    let output = run_with_stdin(&[], b"");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("<DL><p>\n</DL><p>"));
}

#[test]
fn test_keep_header_converts_first_row() {
    let input = "A,http://a,1,\nB,http://b,2,\n";
    let output = run_with_stdin(&["--keep-header"], input.as_bytes());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("<DT>").count(), 2);
}

#[test]
fn test_invalid_utf8_fails() {
    let output = run_with_stdin(&[], b"title,url,time_added,tags\n\xff,u,1,\n");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("UTF-8"), "stderr: {}", stderr);
}
