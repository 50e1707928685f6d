//! End-to-end tests for the `flock` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `flock` with a toolchain that cannot run and no user config.
fn flock(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flock").unwrap();
    cmd.env("FLOCK_TOOLCHAIN__SWIFT", "/nonexistent/toolchain/swift")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn swift_package() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Package.swift"), "// swift-tools-version:3.0\n").unwrap();
    fs::write(dir.path().join(".gitignore"), ".build/\n").unwrap();
    dir
}

#[test]
fn init_creates_scaffold_and_prints_instructions() {
    let project = swift_package();

    flock(project.path())
        .arg("init")
        .arg("--path")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully initialized Flock!"))
        .stdout(predicate::str::contains("config/deploy/Always.swift"))
        .stdout(predicate::str::contains("FlockDependencies.json"));

    let root = project.path();
    assert!(root.join("Flockfile").is_file());
    assert!(root.join("config/deploy/Production.swift").is_file());
    assert!(root.join("config/deploy/Staging.swift").is_file());
    assert!(root.join(".flock/Package.swift").is_file());

    // The toolchain is missing, so the base file keeps its placeholders.
    let base = fs::read_to_string(root.join("config/deploy/Always.swift")).unwrap();
    assert!(base.contains("Config.projectName = nil // Fill this in!"));

    let gitignore = fs::read_to_string(root.join(".gitignore")).unwrap();
    assert_eq!(gitignore, ".build/\n\n# Flock\n.flock/.build\n.flock/Packages\n");
}

#[test]
fn init_announces_each_step() {
    let project = swift_package();

    flock(project.path())
        .args(["init", "--no-fetch", "--path"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating Flock files..."))
        .stdout(predicate::str::contains("Adding Flock files to .gitignore..."))
        .stdout(predicate::str::contains("Downloading").not());
}

#[test]
fn second_init_fails_as_user_error() {
    let project = swift_package();

    flock(project.path())
        .args(["init", "--no-fetch", "--path"])
        .arg(project.path())
        .assert()
        .success();
    let flockfile = fs::read_to_string(project.path().join("Flockfile")).unwrap();

    flock(project.path())
        .args(["init", "--path"])
        .arg(project.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already been initialized"))
        .stdout(predicate::str::contains("Successfully").not());

    assert_eq!(
        fs::read_to_string(project.path().join("Flockfile")).unwrap(),
        flockfile
    );
}

#[test]
fn quiet_init_prints_nothing() {
    let project = swift_package();

    flock(project.path())
        .args(["--quiet", "init", "--no-fetch", "--path"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn json_output_is_a_single_report_document() {
    let project = swift_package();

    let assert = flock(project.path())
        .args(["--output-format", "json", "init", "--no-fetch", "--path"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating Flock files").not());

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["gitignore"], "appended");
    assert_eq!(report["prefetch"], "skipped");
    assert_eq!(report["dependencies_file_written"], true);
    assert!(report["project_name"].is_null());
    assert!(report["introspection_error"].is_string());
    assert_eq!(report["instructions"].as_array().unwrap().len(), 4);
}

#[test]
fn instructions_name_files_under_the_given_path() {
    let project = swift_package();
    let base = project.path().join("config/deploy/Always.swift");

    flock(project.path())
        .args(["init", "--no-fetch", "--path"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("exclude: [\"Flockfile\"]"))
        .stdout(predicate::str::contains(base.display().to_string()));
}

#[test]
fn missing_config_file_is_configuration_error() {
    let project = swift_package();

    flock(project.path())
        .args(["--config", "/nonexistent/flock.toml", "init", "--path"])
        .arg(project.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!project.path().join("Flockfile").exists());
}

#[test]
fn config_file_can_disable_prefetch() {
    let project = swift_package();
    let config = project.path().join("flock.toml");
    fs::write(&config, "[init]\nfetch_dependencies = false\n").unwrap();

    flock(project.path())
        .arg("--config")
        .arg(&config)
        .args(["init", "--path"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloading").not());
}

#[test]
fn completions_are_generated() {
    let home = TempDir::new().unwrap();

    flock(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flock"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let home = TempDir::new().unwrap();

    flock(home.path()).arg("deploy").assert().code(2);
}
