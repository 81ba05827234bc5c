use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rplaytime::db::store::{RecordStore, SqliteStore};

mod common;
use common::{init_db, rpt, seed, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    rpt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let store = SqliteStore::open(&db_path).unwrap();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_list_empty_database() {
    let db_path = setup_test_db("list_empty");
    init_db(&db_path);

    rpt()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No records yet."));
}

#[test]
fn test_list_shows_newest_first() {
    let db_path = setup_test_db("list_order");
    init_db(&db_path);
    seed(&db_path, &[("Chess", 5), ("Tetris", 3661)]);

    let output = rpt()
        .args(["--db", &db_path, "list"])
        .output()
        .expect("failed to run list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let tetris = stdout.find("Tetris").expect("Tetris missing");
    let chess = stdout.find("Chess").expect("Chess missing");
    assert!(tetris < chess, "newest record must come first");
    assert!(stdout.contains("1 hours, 1 minutes, 1 seconds"));
    assert!(stdout.contains("0 hours, 0 minutes, 5 seconds"));
}

#[test]
fn test_track_start_stop_creates_record() {
    let db_path = setup_test_db("track_create");
    init_db(&db_path);

    rpt()
        .args(["--db", &db_path, "track"])
        .write_stdin("start Chess\nstop\nquit\n")
        .assert()
        .success()
        .stdout(contains("Tracking started for 'Chess'."))
        .stdout(contains("Saved new record #1 for 'Chess'"));

    let rows = SqliteStore::open(&db_path).unwrap().list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].activity_name, "Chess");
    assert!(rows[0].total_time >= 0);
}

#[test]
fn test_track_with_name_argument_starts_immediately() {
    let db_path = setup_test_db("track_arg");
    init_db(&db_path);

    rpt()
        .args(["--db", &db_path, "track", "Portal 2"])
        .write_stdin("stop\nquit\n")
        .assert()
        .success()
        .stdout(contains("Tracking started for 'Portal 2'."));

    let rows = SqliteStore::open(&db_path).unwrap().list_all().unwrap();
    assert_eq!(rows[0].activity_name, "Portal 2");
}

#[test]
fn test_track_select_extends_existing_record() {
    let db_path = setup_test_db("track_select");
    init_db(&db_path);
    let ids = seed(&db_path, &[("Chess", 5)]);

    rpt()
        .args(["--db", &db_path, "track"])
        .write_stdin("select 1\nstop\nquit\n")
        .assert()
        .success()
        .stdout(contains("Resumed tracking on 'Chess'."))
        .stdout(contains(format!("Updated record #{}", ids[0])));

    let rows = SqliteStore::open(&db_path).unwrap().list_all().unwrap();
    assert_eq!(rows.len(), 1, "resuming must not create a second row");
    assert_eq!(rows[0].id, ids[0]);
    assert!(rows[0].total_time >= 5);
}

#[test]
fn test_track_empty_name_is_rejected() {
    let db_path = setup_test_db("track_empty");
    init_db(&db_path);

    rpt()
        .args(["--db", &db_path, "track"])
        .write_stdin("start   \nstop\nquit\n")
        .assert()
        .success()
        .stdout(contains("Please enter a game name."))
        .stdout(contains("Tracking is not in progress."));

    let rows = SqliteStore::open(&db_path).unwrap().list_all().unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_track_double_start_warns() {
    let db_path = setup_test_db("track_double");
    init_db(&db_path);

    rpt()
        .args(["--db", &db_path, "track"])
        .write_stdin("start Chess\nstart Go\nstop\nquit\n")
        .assert()
        .success()
        .stdout(contains("Tracking is already in progress."));

    let rows = SqliteStore::open(&db_path).unwrap().list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].activity_name, "Chess");
}

#[test]
fn test_track_delete_selected_after_confirmation() {
    let db_path = setup_test_db("track_delete");
    init_db(&db_path);
    seed(&db_path, &[("Chess", 5), ("Go", 7)]);

    rpt()
        .args(["--db", &db_path, "track"])
        .write_stdin("select 2\ndelete\ny\nquit\n")
        .assert()
        .success()
        .stdout(contains("Are you sure you want to delete the record for Chess?"))
        .stdout(contains("Deleted record"));

    let rows = SqliteStore::open(&db_path).unwrap().list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].activity_name, "Go");
}

#[test]
fn test_track_quit_while_running_warns_and_discards() {
    let db_path = setup_test_db("track_quit");
    init_db(&db_path);

    rpt()
        .args(["--db", &db_path, "track"])
        .write_stdin("start Chess\nquit\n")
        .assert()
        .success()
        .stdout(contains("has not been saved"));

    let rows = SqliteStore::open(&db_path).unwrap().list_all().unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_del_with_yes_removes_record() {
    let db_path = setup_test_db("del_yes");
    init_db(&db_path);
    let ids = seed(&db_path, &[("Chess", 5), ("Go", 7)]);

    rpt()
        .args(["--db", &db_path, "del", "--id", &ids[0].to_string(), "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let rows = SqliteStore::open(&db_path).unwrap().list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].activity_name, "Go");
}

#[test]
fn test_del_cancelled_keeps_record() {
    let db_path = setup_test_db("del_cancel");
    init_db(&db_path);
    let ids = seed(&db_path, &[("Chess", 5)]);

    rpt()
        .args(["--db", &db_path, "del", "--id", &ids[0].to_string()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert_eq!(
        SqliteStore::open(&db_path).unwrap().list_all().unwrap().len(),
        1
    );
}

#[test]
fn test_del_unknown_id_fails() {
    let db_path = setup_test_db("del_unknown");
    init_db(&db_path);

    rpt()
        .args(["--db", &db_path, "del", "--id", "42", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Record #42 not found"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);

    rpt()
        .args(["--db", &db_path, "track"])
        .write_stdin("start Chess\nstop\nquit\n")
        .assert()
        .success();

    rpt()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("create")))
        .stdout(contains("Created record for 'Chess'"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);
    seed(&db_path, &[("Chess", 5), ("Go", 3600)]);

    rpt()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total records:"))
        .stdout(contains("1 hours, 0 minutes, 5 seconds"))
        .stdout(contains("Most played:"))
        .stdout(contains("Integrity check passed."));
}
