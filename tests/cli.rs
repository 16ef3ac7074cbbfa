//! Drives the `novae` binary with `HOME` pointed at a scratch directory.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn novae(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("novae").expect("binary should be built");
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("FORCE_COLOR")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

fn manifest(home: &Path) -> serde_json::Value {
    let content = fs::read_to_string(home.join(".config/novae/config.json"))
        .expect("manifest should exist");
    serde_json::from_str(&content).expect("manifest should be valid JSON")
}

#[test]
fn install_then_list() {
    let home = TempDir::new().expect("Failed to create temp directory");

    novae(home.path())
        .args(["install", "foo", "1.0.0", "script"])
        .assert()
        .success()
        .stdout("Installed foo@1.0.0\n");

    novae(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout("Installed packages:\nfoo@1.0.0 (script)\n");

    assert!(home.path().join(".novae/scripts/foo-1.0.0.json").is_file());
}

#[test]
fn list_on_fresh_home_prints_only_header() {
    let home = TempDir::new().expect("Failed to create temp directory");

    novae(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout("Installed packages:\n");

    assert_eq!(manifest(home.path()), serde_json::json!([]));
}

#[test]
fn install_uninstall_list() {
    let home = TempDir::new().expect("Failed to create temp directory");

    novae(home.path())
        .args(["install", "foo", "1.0.0", "script"])
        .assert()
        .success();
    novae(home.path())
        .args(["uninstall", "foo"])
        .assert()
        .success()
        .stdout("Uninstalled foo\n");
    novae(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout("Installed packages:\n");
}

#[test]
fn uninstall_removes_all_versions() {
    let home = TempDir::new().expect("Failed to create temp directory");

    for version in ["1.0.0", "2.0.0"] {
        novae(home.path())
            .args(["install", "foo", version, "script"])
            .assert()
            .success();
    }
    novae(home.path())
        .args(["uninstall", "foo"])
        .assert()
        .success();

    assert_eq!(manifest(home.path()), serde_json::json!([]));
    assert!(!home.path().join(".novae/scripts/foo-1.0.0.json").exists());
    assert!(!home.path().join(".novae/scripts/foo-2.0.0.json").exists());
}

#[test]
fn uninstall_missing_package_is_silent() {
    let home = TempDir::new().expect("Failed to create temp directory");

    novae(home.path())
        .args(["uninstall", "ghost"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn invalid_type_changes_nothing() {
    let home = TempDir::new().expect("Failed to create temp directory");

    novae(home.path())
        .args(["install", "bar", "1.0.0", "widget"])
        .assert()
        .code(2)
        .stdout("")
        .stderr("Type must be either 'extension' or 'script'\n");

    assert!(!home.path().join(".config/novae/config.json").exists());
    assert!(!home.path().join(".novae/extensions/bar-1.0.0.json").exists());
    assert!(!home.path().join(".novae/scripts/bar-1.0.0.json").exists());
}

#[test]
fn missing_install_arguments_print_usage() {
    let home = TempDir::new().expect("Failed to create temp directory");

    novae(home.path())
        .args(["install", "foo"])
        .assert()
        .code(2)
        .stderr("Usage: novae install <name> <version> <type>\n");
}

#[test]
fn missing_uninstall_name_prints_usage() {
    let home = TempDir::new().expect("Failed to create temp directory");

    novae(home.path())
        .arg("uninstall")
        .assert()
        .code(2)
        .stderr("Usage: novae uninstall <name> [version]\n");
}

#[test]
fn unknown_or_missing_command() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let message = "Unknown command. Use 'install', 'uninstall', or 'list'.\n";

    novae(home.path())
        .arg("publish")
        .assert()
        .code(2)
        .stderr(message);
    novae(home.path())
        .assert()
        .code(2)
        .stderr(message);
}

#[test]
fn quiet_suppresses_confirmation_but_not_listing() {
    let home = TempDir::new().expect("Failed to create temp directory");

    novae(home.path())
        .args(["--quiet", "install", "bar", "0.3.1", "extension"])
        .assert()
        .success()
        .stdout("");
    novae(home.path())
        .args(["-q", "ls"])
        .assert()
        .success()
        .stdout("Installed packages:\nbar@0.3.1 (extension)\n");
}

#[test]
fn corrupt_manifest_fails_with_error() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let config_dir = home.path().join(".config/novae");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    fs::write(config_dir.join("config.json"), "not json").expect("Failed to write manifest");

    novae(home.path())
        .arg("list")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to parse manifest"));
}

#[test]
fn surplus_arguments_are_ignored() {
    let home = TempDir::new().expect("Failed to create temp directory");

    novae(home.path())
        .args(["install", "foo", "1.0.0", "script", "extra"])
        .assert()
        .success()
        .stdout("Installed foo@1.0.0\n");
    novae(home.path())
        .args(["list", "extra"])
        .assert()
        .success()
        .stdout("Installed packages:\nfoo@1.0.0 (script)\n");
}

#[test]
fn version_flag_still_works_on_subcommands() {
    let home = TempDir::new().expect("Failed to create temp directory");

    novae(home.path())
        .args(["uninstall", "--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn reinstall_with_other_type_leaves_no_orphan() {
    let home = TempDir::new().expect("Failed to create temp directory");

    novae(home.path())
        .args(["install", "foo", "1.0.0", "script"])
        .assert()
        .success();
    novae(home.path())
        .args(["install", "foo", "1.0.0", "extension"])
        .assert()
        .success()
        .stdout("Installed foo@1.0.0\n");
    novae(home.path())
        .args(["uninstall", "foo"])
        .assert()
        .success();

    assert_eq!(manifest(home.path()), serde_json::json!([]));
    assert!(!home.path().join(".novae/scripts/foo-1.0.0.json").exists());
    assert!(!home.path().join(".novae/extensions/foo-1.0.0.json").exists());
}
