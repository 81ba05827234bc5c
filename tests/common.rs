#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpt() -> Command {
    cargo_bin_cmd!("rplaytime")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rplaytime.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB through the CLI without touching the user's config file
pub fn init_db(db_path: &str) {
    rpt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Seed records directly through the library store
pub fn seed(db_path: &str, rows: &[(&str, i64)]) -> Vec<i64> {
    use rplaytime::db::store::{RecordStore, SqliteStore};

    let mut store = SqliteStore::open(db_path).expect("open db");
    rows.iter()
        .map(|(name, total)| {
            store
                .create(name, 1_700_000_000.0, 1_700_000_000.0 + *total as f64, *total)
                .expect("create record")
        })
        .collect()
}
