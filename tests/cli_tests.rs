//! CLI surface tests

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn msubatch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("msubatch").unwrap();
    cmd.env_remove("MSUBATCH_ROOT").env_remove("MSUBATCH_SERVICER");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    msubatch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("open"));
}

#[test]
fn test_version_command() {
    msubatch_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("msubatch"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    msubatch_cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_list_scaffolds_staging_layout() {
    let staging = common::TestStaging::new();

    msubatch_cmd()
        .args(["list", "--root"])
        .arg(&staging.root)
        .assert()
        .success()
        .stdout(predicate::str::contains("No MSU files found"));

    assert!(staging.root.is_dir());
    assert!(staging.root.join("Log").is_dir());
    assert!(staging.exists(
        "Please copy the MSU patches you want to install into this folder.txt"
    ));
    assert!(staging.exists("请将需要安装的msu补丁拷贝至本文件夹中.txt"));
}

#[test]
fn test_list_is_idempotent_over_layout() {
    let staging = common::TestStaging::new();
    let placeholder = "Please copy the MSU patches you want to install into this folder.txt";

    msubatch_cmd()
        .args(["list", "--root"])
        .arg(&staging.root)
        .assert()
        .success();
    let first = std::fs::read(staging.root.join(placeholder)).unwrap();

    msubatch_cmd()
        .args(["list", "--root"])
        .arg(&staging.root)
        .assert()
        .success();
    let second = std::fs::read(staging.root.join(placeholder)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_list_shows_pending_patches_with_indices() {
    let staging = common::TestStaging::new();
    staging.write_patch("kb5001.msu");
    staging.write_patch("kb5002.msu");

    msubatch_cmd()
        .args(["list", "--root"])
        .arg(&staging.root)
        .assert()
        .success()
        .stdout(predicate::str::contains("kb5001.msu"))
        .stdout(predicate::str::contains("kb5002.msu"))
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("2. "));
}

#[test]
fn test_list_ignores_non_package_files() {
    let staging = common::TestStaging::new();
    staging.write_patch("notes.txt");

    msubatch_cmd()
        .args(["list", "--root"])
        .arg(&staging.root)
        .assert()
        .success()
        .stdout(predicate::str::contains("No MSU files found"));
}

#[test]
fn test_install_with_empty_staging_is_a_noop() {
    let staging = common::TestStaging::new();

    msubatch_cmd()
        .args(["install", "-y", "--root"])
        .arg(&staging.root)
        .assert()
        .success()
        .stdout(predicate::str::contains("No MSU files found"));

    assert!(staging.log_files().is_empty());
}

#[test]
fn test_root_from_environment() {
    let staging = common::TestStaging::new();
    staging.write_patch("kb5003.msu");

    let mut cmd = msubatch_cmd();
    cmd.env("MSUBATCH_ROOT", &staging.root)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("kb5003.msu"));
}
