mod common;

use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_package_json() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Cargo.toml"), CARGO_TOML).unwrap();

    run_sync(temp.path(), &[])
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Failed to read package.json"));

    assert_eq!(read_cargo_toml(temp.path()), CARGO_TOML);
}

#[test]
fn test_invalid_package_json() {
    let temp = create_project("{\"version\": \"1.0.0\",", CARGO_TOML);

    run_sync(temp.path(), &[])
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Failed to parse package.json"));

    assert_eq!(read_cargo_toml(temp.path()), CARGO_TOML);
}

#[test]
fn test_package_json_without_version() {
    let temp = create_project("{}", CARGO_TOML);

    run_sync(temp.path(), &[])
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: No `version` field in package.json",
        ));

    // Nothing like "undefined" may reach the target.
    assert_eq!(read_cargo_toml(temp.path()), CARGO_TOML);
}

#[test]
fn test_package_json_with_numeric_version() {
    let temp = create_project(r#"{"version": 1}"#, CARGO_TOML);

    run_sync(temp.path(), &[])
        .failure()
        .stderr(predicate::str::contains("must be a string, found a number"));

    assert_eq!(read_cargo_toml(temp.path()), CARGO_TOML);
}

#[test]
fn test_missing_cargo_toml() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), r#"{"version": "1.0.0"}"#).unwrap();

    run_sync(temp.path(), &[])
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Failed to read Cargo.toml"));

    assert!(!temp.path().join("Cargo.toml").exists());
}

#[test]
fn test_package_json_is_not_modified() {
    let package_json = "{\n  \"name\": \"demo\",\n  \"version\": \"0.9.0\"\n}\n";
    let temp = create_project(package_json, CARGO_TOML);

    run_sync(temp.path(), &[]).success();

    assert_eq!(
        fs::read_to_string(temp.path().join("package.json")).unwrap(),
        package_json
    );
}

#[cfg(unix)]
#[test]
fn test_read_only_cargo_toml() {
    let temp = create_project(r#"{"version": "0.4.1"}"#, CARGO_TOML);
    let cargo_toml = temp.path().join("Cargo.toml");

    let mut permissions = fs::metadata(&cargo_toml).unwrap().permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&cargo_toml, permissions).unwrap();

    run_sync(temp.path(), &[])
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Synced").not())
        .stderr(predicate::str::contains("Error: Failed to write Cargo.toml"));

    assert_eq!(read_cargo_toml(temp.path()), CARGO_TOML);

    // No temporary file is left next to the manifest.
    let mut entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    entries.sort();
    assert_eq!(entries, ["Cargo.toml", "package.json"]);
}
