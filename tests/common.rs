#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gd() -> Command {
    cargo_bin_cmd!("gracedesk")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gracedesk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a DB with the built-in seed dataset via the CLI
pub fn init_db(db_path: &str) {
    gd().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize a DB and log in as the demo admin
pub fn init_as_admin(db_path: &str) {
    init_db(db_path);
    gd().args([
        "--db",
        db_path,
        "--test",
        "login",
        "admin@example.com",
        "--password",
        "password",
    ])
    .assert()
    .success();
}

/// Initialize a DB and log in as the demo client
pub fn init_as_client(db_path: &str) {
    init_db(db_path);
    gd().args([
        "--db",
        db_path,
        "--test",
        "login",
        "client@example.com",
        "--password",
        "password",
    ])
    .assert()
    .success();
}

/// Initialize a DB and log in as the demo counselor (Dr. Sarah Johnson, c1)
pub fn init_as_counselor(db_path: &str) {
    init_db(db_path);
    gd().args([
        "--db",
        db_path,
        "--test",
        "login",
        "counselor@example.com",
        "--password",
        "password",
    ])
    .assert()
    .success();
}

/// Open a store over `db_path` with every collection empty, bypassing the
/// seed dataset. Useful for library-level tests that need full control of
/// the collections.
pub fn open_empty_store(db_path: &str) -> gracedesk::core::store::Store {
    let pool = gracedesk::db::open(db_path).expect("open db");
    gracedesk::db::kv::put(&pool.conn, gracedesk::db::kv::KEY_COUNSELORS, "[]").expect("seed");
    gracedesk::db::kv::put(&pool.conn, gracedesk::db::kv::KEY_APPOINTMENTS, "[]").expect("seed");
    gracedesk::db::kv::put(&pool.conn, gracedesk::db::kv::KEY_MESSAGES, "[]").expect("seed");
    gracedesk::db::kv::put(&pool.conn, gracedesk::db::kv::KEY_INVOICES, "[]").expect("seed");
    gracedesk::core::store::Store::open(pool).expect("open store")
}
