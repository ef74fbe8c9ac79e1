use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

fn command() -> Command {
    Command::cargo_bin("modnuke").expect("binary exists")
}

#[test]
fn config_without_flags_prints_file_path() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("config");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Configuration file:"))
        .stdout(predicate::str::contains("modnuke"));
}

#[test]
fn config_set_root_persists() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("workspace");
    root.create_dir_all().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("config")
        .arg("--set-root")
        .arg(root.path());

    cmd.assert().success().stdout(predicate::str::contains("Default scan root set to"));

    let contents =
        fs::read_to_string(temp.child("config/modnuke/config.toml").path()).unwrap();
    assert!(contents.contains("default_root"));
    assert!(contents.contains("workspace"));
}

#[test]
fn scan_falls_back_to_configured_root() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("workspace");
    let module = root.child("proj/node_modules");
    module.create_dir_all().unwrap();
    module.child("index.js").write_str("x").unwrap();

    let config_dir = temp.child("config/modnuke");
    config_dir.create_dir_all().unwrap();
    config_dir
        .child("config.toml")
        .write_str(&format!("default_root = {:?}\n", root.path()))
        .unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("scan");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 1 node_modules director(ies)"))
        .stdout(predicate::str::contains("proj/node_modules"));
}
