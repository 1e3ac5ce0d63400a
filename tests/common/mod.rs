use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Typical `Cargo.toml` fixture with a single package version.
#[allow(unused)]
pub const CARGO_TOML: &str = "[package]\nname = \"demo\"\nversion = \"0.3.0\"\n";

/// Creates a project directory containing `package.json` and `Cargo.toml`.
#[allow(unused)]
pub fn create_project(package_json: &str, cargo_toml: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), package_json).unwrap();
    fs::write(temp.path().join("Cargo.toml"), cargo_toml).unwrap();
    temp
}

#[allow(unused)]
pub fn read_cargo_toml(root: &Path) -> String {
    fs::read_to_string(root.join("Cargo.toml")).unwrap()
}

/// Runs `sync-version` in `root` with the given extra arguments.
pub fn run_sync(root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("sync-version");
    cmd.args(extra_args)
        .env_remove("RUST_LOG")
        .current_dir(root);

    cmd.assert()
}
