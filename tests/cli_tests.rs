//! CLI integration tests
//!
//! Runs the compiled binary and checks the inspection commands end to end,
//! including environment-driven configuration. Each invocation is a fresh
//! process, so these tests control the child environment directly instead of
//! mutating their own.

use std::process::{Command, Output};

fn run_cli(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_github-mcp-server"));
    cmd.args(args);
    // Keep the child environment deterministic regardless of the test runner
    cmd.env_remove("DISABLE_INSTRUCTIONS");
    cmd.env_remove("GITHUB_TOOLSETS");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to run CLI")
}

fn run_cli_success(args: &[&str], env: &[(&str, &str)]) -> String {
    let output = run_cli(args, env);
    assert!(
        output.status.success(),
        "CLI command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ============================================================================
// instructions command
// ============================================================================

#[test]
fn instructions_prints_composed_string() {
    let stdout = run_cli_success(&["instructions", "--toolsets", "issues,projects"], &[]);
    assert!(stdout.starts_with("The GitHub MCP Server provides tools"));
    assert!(stdout.contains("## Issues"));
    assert!(stdout.contains("## Projects"));
}

#[test]
fn instructions_defaults_include_context_hint() {
    // The default toolset selection enables "context"
    let stdout = run_cli_success(&["instructions"], &[]);
    assert!(stdout.contains("get_me"));
}

#[test]
fn instructions_respects_toolsets_env_var() {
    let stdout = run_cli_success(&["instructions"], &[("GITHUB_TOOLSETS", "discussions")]);
    assert!(stdout.contains("## Discussions"));
    assert!(!stdout.contains("get_me"));
}

#[test]
fn instructions_empty_when_disabled() {
    let stdout = run_cli_success(
        &["instructions", "--toolsets", "all"],
        &[("DISABLE_INSTRUCTIONS", "true")],
    );
    assert_eq!(stdout, "");
}

#[test]
fn instructions_json_output_is_valid() {
    let stdout = run_cli_success(
        &["instructions", "--toolsets", "issues", "--format", "json"],
        &[],
    );
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON output");
    assert_eq!(value["enabled_toolsets"][0], "issues");
    assert!(value["instructions"]
        .as_str()
        .unwrap()
        .contains("## Issues"));
}

// ============================================================================
// toolsets command
// ============================================================================

#[test]
fn toolsets_lists_catalog_with_defaults_marked() {
    let stdout = run_cli_success(&["toolsets"], &[]);
    assert!(stdout.contains("context"));
    assert!(stdout.contains("pull_requests"));
    assert!(stdout.contains("(default)"));
}

#[test]
fn toolsets_json_output_is_valid() {
    let stdout = run_cli_success(&["toolsets", "--format", "json"], &[]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON output");
    let catalog = value.as_array().expect("expected a JSON array");
    assert!(catalog.iter().any(|t| t["id"] == "issues"));
}
