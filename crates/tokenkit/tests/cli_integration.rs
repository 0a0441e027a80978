//! CLI integration tests for the tokenkit command-line interface.
//!
//! These tests verify:
//! - Help text is displayed correctly
//! - Argument parsing works as expected
//! - Invalid inputs are rejected with appropriate messages
//!
//! Note: These tests do not reach any identity provider - they test
//! CLI parsing and help output only.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the tokenkit binary.
fn tokenkit() -> Command {
    Command::cargo_bin("tokenkit").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_displays() {
    tokenkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokenkit"))
        .stdout(predicate::str::contains("OAuth 2.0"));
}

#[test]
fn test_version_displays() {
    tokenkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokenkit"));
}

#[test]
fn test_help_lists_subcommands() {
    tokenkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("code"))
        .stdout(predicate::str::contains("pkce"))
        .stdout(predicate::str::contains("refresh"))
        .stdout(predicate::str::contains("credentials"))
        .stdout(predicate::str::contains("openid"))
        .stdout(predicate::str::contains("validate"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Global Flag Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_verbose_flag_accepted() {
    tokenkit().args(["--verbose", "--help"]).assert().success();
}

#[test]
fn test_profile_flag_accepted() {
    tokenkit()
        .args(["--profile", "keycloak", "--help"])
        .assert()
        .success();
}

// ─────────────────────────────────────────────────────────────────────────────
// Subcommand Help Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_code_help() {
    tokenkit()
        .args(["code", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("authorization-code"));
}

#[test]
fn test_pkce_help() {
    tokenkit()
        .args(["pkce", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PKCE"));
}

#[test]
fn test_refresh_help() {
    tokenkit()
        .args(["refresh", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("refresh"));
}

#[test]
fn test_credentials_help() {
    tokenkit()
        .args(["credentials", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("client-credentials"));
}

#[test]
fn test_openid_help() {
    tokenkit()
        .args(["openid", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID token"));
}

#[test]
fn test_validate_help() {
    tokenkit()
        .args(["validate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Introspect"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Invalid Input Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_subcommand_fails() {
    tokenkit()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_invalid_flag_fails() {
    tokenkit()
        .arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_refresh_requires_a_token_argument() {
    tokenkit()
        .arg("refresh")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOKEN"));
}

#[test]
fn test_validate_requires_a_token_argument() {
    tokenkit()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ACCESS_TOKEN"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Missing Profile Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_profile_exits_nonzero() {
    tokenkit()
        .args(["--profile", "no-such-profile-xyz", "credentials"])
        // keep discovery away from any real user config
        .env("TOKENKIT_CONFIG_DIR", "/nonexistent-tokenkit-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-profile-xyz"));
}
