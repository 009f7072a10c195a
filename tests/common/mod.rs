//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get a crew command
pub fn crew() -> Command {
    Command::new(cargo::cargo_bin!("crew"))
}

/// Helper to create a test workspace in a temp directory
pub fn setup_test_workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    crew()
        .current_dir(tmp.path())
        .args(["init", "--actor", "hr-admin", "--role", "hr"])
        .assert()
        .success();
    tmp
}

/// Extract the first ID with the given prefix from command output
fn extract_id(output: &std::process::Output, prefix: &str) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .split_whitespace()
        .find(|w| w.contains(prefix))
        .map(|w| {
            w.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '-')
                .to_string()
        })
        .unwrap_or_default()
}

/// Helper to create a test project, returning its short ID
pub fn create_test_project(tmp: &TempDir, name: &str, required: u32) -> String {
    let output = crew()
        .current_dir(tmp.path())
        .args([
            "project",
            "new",
            "--name",
            name,
            "--required",
            &required.to_string(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    extract_id(&output, "PRJ-")
}

/// Helper to add a test engineer, returning its short ID
pub fn create_test_engineer(tmp: &TempDir, name: &str, email: &str, skills: &str) -> String {
    let mut args = vec!["engineer", "new", "--name", name, "--email", email];
    if !skills.is_empty() {
        args.push("--skill");
        args.push(skills);
    }
    let output = crew().current_dir(tmp.path()).args(&args).output().unwrap();
    assert!(output.status.success());
    extract_id(&output, "ENG-")
}

/// Helper to raise a test request, returning its short ID
pub fn create_test_request(tmp: &TempDir, project_id: &str, role: &str, quantity: u32) -> String {
    let output = crew()
        .current_dir(tmp.path())
        .args([
            "request",
            "new",
            "--project",
            project_id,
            "--role",
            role,
            "--quantity",
            &quantity.to_string(),
            "--justification",
            "Deadline pressure",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    extract_id(&output, "REQ-")
}
