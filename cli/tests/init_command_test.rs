use assert_cmd::{Command, cargo_bin_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn hullpack() -> Command {
    cargo_bin_cmd!("hullpack")
}

#[test]
fn test_init_command_help() {
    hullpack()
        .arg("init")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory to initialize"))
        .stdout(predicate::str::contains(
            "Reverse-DNS application identifier"
        ))
        .stdout(predicate::str::contains(
            "Force overwrite existing hullpack.config.json"
        ));
}

#[test]
fn test_init_command_basic() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("hullpack.config.json");

    hullpack()
        .arg("init")
        .arg("--path")
        .arg(temp_dir.path())
        .arg("--app-id")
        .arg("com.deafcomm.app")
        .arg("--app-name")
        .arg("Deaf Communication Aid")
        .arg("--web-dir")
        .arg("dist")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized hullpack"))
        .stdout(predicate::str::contains("com.deafcomm.app"))
        .stdout(predicate::str::contains("Deaf Communication Aid"));

    assert!(config_file.exists(), "hullpack.config.json should exist");

    let content = fs::read_to_string(&config_file).unwrap();
    assert!(content.contains("\"appId\": \"com.deafcomm.app\""));
    assert!(content.contains("\"appName\": \"Deaf Communication Aid\""));
    assert!(content.contains("\"webDir\": \"dist\""));
    assert!(content.contains("\"androidScheme\": \"https\""));
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("hullpack.config.json");
    fs::write(&config_file, "{ \"appId\": \"com.keep.me\" }").unwrap();

    hullpack()
        .arg("init")
        .arg("--path")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Config already exists"))
        .stderr(predicate::str::contains("--force"));

    let content = fs::read_to_string(&config_file).unwrap();
    assert!(content.contains("com.keep.me"), "file must be untouched");
}

#[test]
fn test_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("hullpack.config.json");
    fs::write(&config_file, "old").unwrap();

    hullpack()
        .arg("init")
        .arg("--path")
        .arg(temp_dir.path())
        .arg("--app-id")
        .arg("com.fresh.app")
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized hullpack"));

    let content = fs::read_to_string(&config_file).unwrap();
    assert!(content.contains("com.fresh.app"));
}

#[test]
fn test_init_rejects_bad_app_id() {
    let temp_dir = TempDir::new().unwrap();

    hullpack()
        .arg("init")
        .arg("--path")
        .arg(temp_dir.path())
        .arg("--app-id")
        .arg("notreversedns")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reverse-DNS"));

    assert!(!temp_dir.path().join("hullpack.config.json").exists());
}
