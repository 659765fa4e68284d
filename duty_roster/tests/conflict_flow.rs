mod common;
use common::{fk_check_empty, setup_db};

use chrono::NaiveDate;
use diesel::prelude::*;
use duty_roster::conflict::{ConflictReport, EXTRA_PROGRAM_LABEL, detect_conflicts};
use duty_roster::models::NewShiftAssignment;
use duty_roster::roster::repo::{delete_person, upsert_person};
use duty_roster::schedule::{ScheduleRepo, SqliteRepo};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn january() -> (NaiveDate, NaiveDate) {
    (date(2025, 1, 1), date(2025, 1, 31))
}

#[test]
fn month_pass_reports_only_rotation_matches() {
    let (_db, mut conn) = setup_db();
    upsert_person(&mut conn, "RE-0001", "Silva", "alfa").unwrap();
    upsert_person(&mut conn, "RE-0002", "Souza", "bravo").unwrap();

    // 2025-01-06 is an Alfa day: Silva is double-booked, Souza is not.
    let repo = SqliteRepo::new();
    repo.assign(&mut conn, "RE-0001", date(2025, 1, 6), None).unwrap();
    repo.assign(&mut conn, "RE-0002", date(2025, 1, 6), None).unwrap();

    let (lo, hi) = january();
    let personnel = repo.list_personnel(&mut conn).unwrap();
    let assignments = repo.list_assignments(&mut conn, lo, hi).unwrap();

    let conflicts = detect_conflicts(&personnel, &assignments, lo, hi);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].service_date, date(2025, 1, 6));
    assert_eq!(conflicts[0].person_name, "Silva");
    assert_eq!(conflicts[0].home_group_name, "Alfa");
    assert_eq!(conflicts[0].program, EXTRA_PROGRAM_LABEL);

    // the same snapshot yields the same report
    let again = detect_conflicts(&personnel, &assignments, lo, hi);
    assert_eq!(conflicts, again);

    fk_check_empty(&mut conn);
}

#[test]
fn stale_assignment_list_with_deleted_person_is_harmless() {
    let (_db, mut conn) = setup_db();
    upsert_person(&mut conn, "RE-0001", "Silva", "alfa").unwrap();

    let repo = SqliteRepo::new();
    repo.assign(&mut conn, "RE-0001", date(2025, 1, 6), None).unwrap();

    let (lo, hi) = january();
    // snapshot the assignments, then lose the person (deletion racing a view)
    let stale_assignments = repo.list_assignments(&mut conn, lo, hi).unwrap();
    delete_person(&mut conn, "RE-0001").unwrap();
    let personnel = repo.list_personnel(&mut conn).unwrap();
    assert!(personnel.is_empty());

    let conflicts = detect_conflicts(&personnel, &stale_assignments, lo, hi);
    assert!(conflicts.is_empty());
}

#[test]
fn garbled_stored_date_skips_one_record_not_the_pass() {
    let (_db, mut conn) = setup_db();
    upsert_person(&mut conn, "RE-0001", "Silva", "alfa").unwrap();

    let repo = SqliteRepo::new();
    repo.assign(&mut conn, "RE-0001", date(2025, 1, 6), None).unwrap();

    // Write one row with a date shape the schema does not police.
    use duty_roster::schema::personnel::dsl as p;
    use duty_roster::schema::shift_assignment::dsl as sa;
    let silva: i32 = p::personnel
        .filter(p::id_number.eq("RE-0001"))
        .select(p::id)
        .first(&mut conn)
        .unwrap();
    let period = repo.ensure_period(&mut conn, 2025, 1).unwrap();
    diesel::insert_into(sa::shift_assignment)
        .values(NewShiftAssignment {
            period_id: period,
            person_id: silva,
            service_date: "06/01/2025",
            role: None,
            notes: None,
        })
        .execute(&mut conn)
        .unwrap();

    let (lo, hi) = january();
    let personnel = repo.list_personnel(&mut conn).unwrap();
    // pull everything, including the garbled row
    let assignments: Vec<duty_roster::models::ShiftAssignment> = sa::shift_assignment
        .select(duty_roster::models::ShiftAssignment::as_select())
        .load(&mut conn)
        .unwrap();
    assert_eq!(assignments.len(), 2);

    let conflicts = detect_conflicts(&personnel, &assignments, lo, hi);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].service_date, date(2025, 1, 6));
}

#[test]
fn neighboring_month_assignment_never_appears() {
    let (_db, mut conn) = setup_db();
    upsert_person(&mut conn, "RE-0001", "Silva", "alfa").unwrap();

    let repo = SqliteRepo::new();
    // 2025-02-03 is an Alfa day, but sits one window past January
    repo.assign(&mut conn, "RE-0001", date(2025, 2, 3), None).unwrap();

    let (lo, hi) = january();
    let personnel = repo.list_personnel(&mut conn).unwrap();
    // hand the detector a wider list than the window on purpose
    let assignments = repo
        .list_assignments(&mut conn, date(2025, 1, 1), date(2025, 12, 31))
        .unwrap();
    assert_eq!(assignments.len(), 1);

    let conflicts = detect_conflicts(&personnel, &assignments, lo, hi);
    assert!(conflicts.is_empty());
}

#[test]
fn report_renders_for_operators() {
    let (_db, mut conn) = setup_db();
    upsert_person(&mut conn, "RE-0001", "Silva", "alfa").unwrap();

    let repo = SqliteRepo::new();
    repo.assign(&mut conn, "RE-0001", date(2025, 1, 6), None).unwrap();

    let (lo, hi) = january();
    let personnel = repo.list_personnel(&mut conn).unwrap();
    let assignments = repo.list_assignments(&mut conn, lo, hi).unwrap();

    let report = ConflictReport(detect_conflicts(&personnel, &assignments, lo, hi));
    let text = report.to_string();
    assert!(text.contains("2025-01-06"));
    assert!(text.contains("Silva"));
    assert!(text.contains("PMF"));
}
