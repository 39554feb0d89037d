#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// `timeclock` binary with HOME pointed at a scratch directory, so a real
/// user configuration never leaks into the tests.
pub fn tc() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("timeclock_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("timeclock");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB through the CLI.
pub fn init_db(db_path: &str) {
    tc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Clock in or out at a fixed instant without location.
pub fn clock(db_path: &str, action: &str, at: &str) {
    tc().args(["--db", db_path, "--at", at, action, "--no-location"])
        .assert()
        .success();
}
