#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use sitterpay::core::roster::{DEFAULT_ROSTER_KEY, load_records};
use sitterpay::models::caregiver::CaregiverRecord;
use sitterpay::store::SqliteStore;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary under test, with HOME pointed at a scratch dir so no real config
/// file is read.
pub fn sp() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("sitterpay_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("sitterpay");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Binary under test with its own HOME, for tests that need a config file.
pub fn sp_with_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("sitterpay");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Fresh HOME containing `.sitterpay/sitterpay.conf` with `content`.
/// Returns the HOME dir and the config file path.
pub fn home_with_config(name: &str, content: &str) -> (PathBuf, PathBuf) {
    let mut home = env::temp_dir();
    home.push(format!("{}_sitterpay_home", name));
    fs::remove_dir_all(&home).ok();

    let dir = home.join(".sitterpay");
    fs::create_dir_all(&dir).expect("create config dir");
    let conf = dir.join("sitterpay.conf");
    fs::write(&conf, content).expect("write config");
    (home, conf)
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sitterpay.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB in test mode (no config file written).
pub fn init_db(db_path: &str) {
    sp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a caregiver through the CLI.
pub fn add_caregiver(db_path: &str, first: &str, last: &str, mobile: &str, rate: &str) {
    sp().args([
        "--db", db_path, "add", first, last, "--mobile", mobile, "--rate", rate,
    ])
    .assert()
    .success();
}

/// Read the roster straight from the database through the library.
pub fn roster_in_db(db_path: &str) -> Vec<CaregiverRecord> {
    let store = SqliteStore::open(db_path).expect("open db");
    load_records(&store, DEFAULT_ROSTER_KEY)
}
