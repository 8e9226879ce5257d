//! Integration tests for the warren CLI
//!
//! These tests run the warren binary: help/version, global flags, exit
//! codes, and the JSON error envelope.

use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

/// Get a Command for warren
fn warren() -> Command {
    cargo_bin_cmd!("warren")
}

/// Path of a shipped map fixture
fn map(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("maps")
        .join(name)
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    warren()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: warren"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("explore"))
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("route"));
}

#[test]
fn test_version_flag() {
    warren()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("warren"));
}

// ============================================================================
// Exit codes and error envelopes
// ============================================================================

#[test]
fn test_unknown_flag_exits_2() {
    warren()
        .args(["explore", "--bogus"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_usage_error_json_envelope() {
    warren()
        .args(["--format", "json", "explore", "--bogus"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_map_exits_3() {
    warren()
        .args(["explore", "/nonexistent/map.json"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("map not found"));
}

#[test]
fn test_missing_map_json_envelope() {
    warren()
        .args(["--format", "json", "explore", "/nonexistent/map.json"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"map_not_found\""))
        .stderr(predicate::str::contains("\"code\":3"));
}

#[test]
fn test_malformed_map_exits_3() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{not json").unwrap();
    warren()
        .arg("explore")
        .arg(&path)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("invalid map"));
}

#[test]
fn test_quiet_suppresses_error_text() {
    warren()
        .args(["--quiet", "explore", "/nonexistent/map.json"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Explore
// ============================================================================

#[test]
fn test_explore_line_map() {
    warren()
        .arg("explore")
        .arg(map("test_line.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("nnn"))
        .stdout(predicate::str::contains("all 4 rooms visited in 3 moves"))
        .stdout(predicate::str::contains("replay check: ok"));
}

#[test]
fn test_explore_start_flag() {
    warren()
        .arg("explore")
        .arg(map("test_line.json"))
        .args(["--start", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sss"));
}

#[test]
fn test_explore_is_deterministic() {
    let first = warren()
        .arg("explore")
        .arg(map("test_loop_fork.json"))
        .output()
        .unwrap();
    let second = warren()
        .arg("explore")
        .arg(map("test_loop_fork.json"))
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_explore_main_maze() {
    warren()
        .arg("explore")
        .arg(map("main_maze.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("all 500 rooms visited"));
}

#[test]
fn test_explore_json_output() {
    warren()
        .args(["--format", "json"])
        .arg("explore")
        .arg(map("test_line.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"moves\":\"nnn\""))
        .stdout(predicate::str::contains("\"rooms_visited\":4"))
        .stdout(predicate::str::contains("\"backtracks\":0"));
}

#[test]
fn test_explore_disconnected_map_exits_3() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("split.json");
    std::fs::write(
        &path,
        r#"{
            "0": [[0, 0], {"n": 1}],
            "1": [[0, 1], {"s": 0}],
            "9": [[5, 5], {}]
        }"#,
    )
    .unwrap();
    warren()
        .arg("explore")
        .arg(&path)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("never reached"))
        .stderr(predicate::str::contains("9"));
}

#[test]
fn test_explore_undersized_bound_exits_3() {
    warren()
        .arg("explore")
        .arg(map("test_cross.json"))
        .args(["--bound-factor", "1"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("traversal incomplete"));
}

#[test]
fn test_explore_reads_bound_factor_from_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("warren.toml");
    std::fs::write(&config, "[explore]\nbound_factor = 1\n").unwrap();
    warren()
        .arg("--config")
        .arg(&config)
        .arg("explore")
        .arg(map("test_cross.json"))
        .assert()
        .failure()
        .code(3);
}

// ============================================================================
// Verify
// ============================================================================

#[test]
fn test_verify_complete_path() {
    warren()
        .arg("verify")
        .arg(map("test_line.json"))
        .arg("nnn")
        .assert()
        .success()
        .stdout(predicate::str::contains("all 4 rooms visited in 3 moves"));
}

#[test]
fn test_verify_accepts_separators() {
    warren()
        .arg("verify")
        .arg(map("test_line.json"))
        .arg("n, n n")
        .assert()
        .success();
}

#[test]
fn test_verify_partial_path_exits_3() {
    warren()
        .arg("verify")
        .arg(map("test_line.json"))
        .arg("n")
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("2 of 4 rooms visited in 1 moves"))
        .stdout(predicate::str::contains("unvisited: 2, 3"));
}

#[test]
fn test_verify_impossible_move_exits_3() {
    warren()
        .arg("verify")
        .arg(map("test_line.json"))
        .arg("e")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("no e exit"));
}

#[test]
fn test_verify_from_moves_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("moves.txt");
    std::fs::write(&path, "nnn\n").unwrap();
    warren()
        .arg("verify")
        .arg(map("test_line.json"))
        .arg("--moves-file")
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_verify_from_stdin() {
    warren()
        .arg("verify")
        .arg(map("test_line.json"))
        .args(["--moves-file", "-"])
        .write_stdin("nnn")
        .assert()
        .success();
}

#[test]
fn test_verify_without_moves_exits_2() {
    warren()
        .arg("verify")
        .arg(map("test_line.json"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no moves given"));
}

#[test]
fn test_explore_then_verify_round_trip() {
    let output = warren()
        .arg("explore")
        .arg(map("test_loop.json"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let moves = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap()
        .to_string();

    warren()
        .arg("verify")
        .arg(map("test_loop.json"))
        .arg(&moves)
        .assert()
        .success()
        .stdout(predicate::str::contains("all 8 rooms visited"));
}
