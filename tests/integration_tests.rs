use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{gd, init_as_admin, init_as_client, init_as_counselor, init_db, setup_test_db};

#[test]
fn test_init_seeds_the_directory() {
    let db_path = setup_test_db("init_seeds");

    gd().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Directory ready: 6 counselors on file"))
        .stdout(contains("gracedesk initialization completed!"));
}

#[test]
fn test_browse_lists_all_counselors_by_default() {
    let db_path = setup_test_db("browse_all");
    init_db(&db_path);

    gd().args(["--db", &db_path, "--test", "browse"])
        .assert()
        .success()
        .stdout(contains("Dr. Sarah Johnson"))
        .stdout(contains("Pastor Michael Thompson"))
        .stdout(contains("Jennifer Liu, LPC"))
        .stdout(contains("6 counselors found"));
}

#[test]
fn test_browse_filters_combine_with_and() {
    let db_path = setup_test_db("browse_filters");
    init_db(&db_path);

    gd().args([
        "--db",
        &db_path,
        "--test",
        "browse",
        "--specialty",
        "Anxiety",
        "--experience",
        "10-15",
    ])
    .assert()
    .success()
    .stdout(contains("Dr. Sarah Johnson"))
    .stdout(contains("Jennifer Liu").not())
    .stdout(contains("1 counselors found"))
    .stdout(contains("Filtering by: 1 specialties, experience 10-15 years"));
}

#[test]
fn test_browse_boundary_year_is_excluded_from_the_next_bucket() {
    let db_path = setup_test_db("browse_bucket_edge");
    init_db(&db_path);

    // Dr. Sarah Johnson has exactly 15 years: 15+ must not match her
    gd().args([
        "--db",
        &db_path,
        "--test",
        "browse",
        "--specialty",
        "Anxiety",
        "--experience",
        "15+",
    ])
    .assert()
    .success()
    .stdout(contains("No counselors found matching your criteria."));
}

#[test]
fn test_browse_free_text_search() {
    let db_path = setup_test_db("browse_search");
    init_db(&db_path);

    gd().args(["--db", &db_path, "--test", "browse", "--search", "addiction"])
        .assert()
        .success()
        .stdout(contains("David Rodriguez, MA"))
        .stdout(contains("1 counselors found"));
}

#[test]
fn test_show_profile_and_unknown_placeholder() {
    let db_path = setup_test_db("show_profile");
    init_db(&db_path);

    gd().args(["--db", &db_path, "--test", "show", "c1"])
        .assert()
        .success()
        .stdout(contains("Dr. Sarah Johnson"))
        .stdout(contains("Nashville, TN"))
        .stdout(contains("Accepting new clients: yes"));

    gd().args(["--db", &db_path, "--test", "show", "c99"])
        .assert()
        .success()
        .stdout(contains("Counselor 'c99' not found."));
}

#[test]
fn test_demo_login_and_whoami() {
    let db_path = setup_test_db("demo_login");
    init_db(&db_path);

    gd().args([
        "--db",
        &db_path,
        "--test",
        "login",
        "client@example.com",
        "--password",
        "password",
    ])
    .assert()
    .success()
    .stdout(contains("Logged in as John Client (client)."));

    gd().args(["--db", &db_path, "--test", "whoami"])
        .assert()
        .success()
        .stdout(contains("client@example.com"));
}

#[test]
fn test_invalid_credentials_share_one_message() {
    let db_path = setup_test_db("login_invalid");
    init_db(&db_path);

    gd().args([
        "--db",
        &db_path,
        "--test",
        "login",
        "client@example.com",
        "--password",
        "wrong",
    ])
    .assert()
    .success()
    .stderr(contains("Invalid email or password."));

    gd().args([
        "--db",
        &db_path,
        "--test",
        "login",
        "nobody@example.com",
        "--password",
        "password",
    ])
    .assert()
    .success()
    .stderr(contains("Invalid email or password."));
}

#[test]
fn test_register_validation_blocks_before_persisting() {
    let db_path = setup_test_db("register_validation");
    init_db(&db_path);

    gd().args([
        "--db",
        &db_path,
        "--test",
        "register",
        "Jane Doe",
        "jane@example.com",
        "--password",
        "secret",
        "--confirm",
        "different",
        "--accept-terms",
    ])
    .assert()
    .success()
    .stderr(contains("Passwords do not match."));

    gd().args([
        "--db",
        &db_path,
        "--test",
        "register",
        "Jane Doe",
        "jane@example.com",
        "--password",
        "secret",
        "--confirm",
        "secret",
    ])
    .assert()
    .success()
    .stderr(contains("--accept-terms"));

    // Neither attempt created the account, so this one succeeds
    gd().args([
        "--db",
        &db_path,
        "--test",
        "register",
        "Jane Doe",
        "jane@example.com",
        "--password",
        "secret",
        "--confirm",
        "secret",
        "--accept-terms",
    ])
    .assert()
    .success()
    .stdout(contains("registered and logged in as a client"));
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let db_path = setup_test_db("register_duplicate");
    init_db(&db_path);

    for _ in 0..2 {
        gd().args([
            "--db",
            &db_path,
            "--test",
            "register",
            "Jane Doe",
            "jane@example.com",
            "--password",
            "secret",
            "--confirm",
            "secret",
            "--accept-terms",
        ])
        .assert()
        .success();
    }

    gd().args([
        "--db",
        &db_path,
        "--test",
        "login",
        "jane@example.com",
        "--password",
        "secret",
    ])
    .assert()
    .success()
    .stdout(contains("Logged in as Jane Doe (client)."));
}

#[test]
fn test_booking_requires_login_and_remembers_the_intent() {
    let db_path = setup_test_db("book_requires_login");
    init_db(&db_path);

    gd().args([
        "--db", &db_path, "--test", "book", "c1", "--date", "2031-06-02", "--time", "10:00",
    ])
    .assert()
    .success()
    .stdout(contains("You need to be logged in"));

    gd().args([
        "--db",
        &db_path,
        "--test",
        "login",
        "client@example.com",
        "--password",
        "password",
    ])
    .assert()
    .success()
    .stdout(contains("Picking up where you left off: gracedesk book c1"));

    // The stash is one-shot: a second login says nothing about it
    gd().args([
        "--db",
        &db_path,
        "--test",
        "login",
        "client@example.com",
        "--password",
        "password",
    ])
    .assert()
    .success()
    .stdout(contains("Picking up where you left off").not());
}

#[test]
fn test_booking_creates_a_scheduled_appointment() {
    let db_path = setup_test_db("book_session");
    init_as_client(&db_path);

    gd().args([
        "--db", &db_path, "--test", "book", "c1", "--date", "2031-06-02", "--time", "10:00",
    ])
    .assert()
    .success()
    .stdout(contains("Session booked with Dr. Sarah Johnson"))
    .stdout(contains("Appointment id:"))
    .stdout(contains("Meeting link:"));

    gd().args(["--db", &db_path, "--test", "appointments"])
        .assert()
        .success()
        .stdout(contains("2031-06-02"))
        .stdout(contains("scheduled"));
}

#[test]
fn test_booking_a_closed_counselor_is_refused() {
    let db_path = setup_test_db("book_closed");
    init_as_client(&db_path);

    // Pastor Michael Thompson (c2) is seeded with accepting_clients = false
    gd().args([
        "--db", &db_path, "--test", "book", "c2", "--date", "2031-06-02", "--time", "10:00",
    ])
    .assert()
    .success()
    .stdout(contains("not accepting new clients"));
}

#[test]
fn test_counselor_completes_a_scheduled_appointment() {
    let db_path = setup_test_db("complete_appointment");
    init_as_counselor(&db_path);

    // a2 is seeded scheduled for counselor c1
    gd().args(["--db", &db_path, "--test", "complete", "a2"])
        .assert()
        .success()
        .stdout(contains("Appointment marked completed."));

    gd().args(["--db", &db_path, "--test", "cancel", "a2"])
        .assert()
        .success()
        .stdout(contains("already completed"));
}

#[test]
fn test_only_the_owning_counselor_may_update_an_appointment() {
    let db_path = setup_test_db("complete_foreign");
    init_as_counselor(&db_path);

    // a3 is seeded for counselor c2, not the logged-in c1
    gd().args(["--db", &db_path, "--test", "complete", "a3"])
        .assert()
        .success()
        .stdout(contains("Only the counselor this session is booked with"));
}

#[test]
fn test_message_flow_send_inbox_read() {
    let db_path = setup_test_db("message_flow");
    init_as_client(&db_path);

    gd().args([
        "--db",
        &db_path,
        "--test",
        "send",
        "c1",
        "Do you have availability next week?",
    ])
    .assert()
    .success()
    .stdout(contains("Message sent to Dr. Sarah Johnson."));

    // m2 is seeded unread for the demo client
    gd().args(["--db", &db_path, "--test", "inbox", "--unread"])
        .assert()
        .success()
        .stdout(contains("m2"));

    gd().args(["--db", &db_path, "--test", "read", "m2"])
        .assert()
        .success()
        .stdout(contains("calendar invitation"));

    gd().args(["--db", &db_path, "--test", "inbox", "--unread"])
        .assert()
        .success()
        .stdout(contains("No messages to show."));
}

#[test]
fn test_only_the_receiver_marks_a_message_read() {
    let db_path = setup_test_db("read_foreign");
    init_as_counselor(&db_path);

    // m2 is addressed to the demo client, not the counselor
    gd().args(["--db", &db_path, "--test", "read", "m2"])
        .assert()
        .success()
        .stdout(contains("Only the receiver can mark a message as read."));
}

#[test]
fn test_admin_bills_and_collects_an_invoice() {
    let db_path = setup_test_db("invoice_flow");
    init_as_admin(&db_path);

    gd().args(["--db", &db_path, "--test", "bill", "c2", "--amount", "120"])
        .assert()
        .success()
        .stdout(contains("issued to Pastor Michael Thompson"));

    gd().args(["--db", &db_path, "--test", "invoices", "--pending"])
        .assert()
        .success()
        .stdout(contains("i2"))
        .stdout(contains("120.00"));

    gd().args(["--db", &db_path, "--test", "pay", "i2"])
        .assert()
        .success()
        .stdout(contains("Invoice marked paid."));

    gd().args(["--db", &db_path, "--test", "pay", "i2"])
        .assert()
        .success()
        .stdout(contains("Invoice is already paid."));
}

#[test]
fn test_invoicing_is_admin_only() {
    let db_path = setup_test_db("invoice_gate");
    init_as_client(&db_path);

    gd().args(["--db", &db_path, "--test", "bill", "c2"])
        .assert()
        .success()
        .stdout(contains("Only an admin can issue invoices."));
}

#[test]
fn test_join_adds_a_browsable_profile() {
    let db_path = setup_test_db("join_profile");
    init_db(&db_path);

    gd().args([
        "--db",
        &db_path,
        "--test",
        "join",
        "Grace Kim, LPC",
        "grace.kim@example.com",
        "--location",
        "Denver, CO",
        "--specialty",
        "Anxiety",
        "--years",
        "4",
    ])
    .assert()
    .success()
    .stdout(contains("Profile created for Grace Kim, LPC."))
    .stdout(contains("Counselor id:"));

    gd().args([
        "--db",
        &db_path,
        "--test",
        "browse",
        "--specialty",
        "Anxiety",
        "--experience",
        "0-5",
    ])
    .assert()
    .success()
    .stdout(contains("Grace Kim, LPC"))
    .stdout(contains("1 counselors found"));
}

#[test]
fn test_admin_dashboard_reports_platform_stats() {
    let db_path = setup_test_db("admin_dashboard");
    init_as_admin(&db_path);

    gd().args(["--db", &db_path, "--test", "dashboard"])
        .assert()
        .success()
        .stdout(contains("Admin Dashboard"))
        .stdout(contains("Total counselors   : 6"))
        .stdout(contains("Pending invoices   : 1"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("oplog");
    init_as_client(&db_path);

    gd().args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("login"));
}
