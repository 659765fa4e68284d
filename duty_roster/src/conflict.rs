//! Extra-shift conflict detection against the duty rotation.
//!
//! ## What this does
//! Joins the roster with the extra-shift assignments inside an inspection
//! window, computes the rotation group on duty for each assignment's date,
//! and reports every assignment where the person's home group is the group
//! already on regular duty that day.
//!
//! ## Degradation, not failure
//! The pass never aborts on bad records: an assignment with a malformed
//! date, or one pointing at a person no longer on the roster (deletions can
//! race a stale assignment list), is skipped and the rest of the batch is
//! still examined.
//!
//! ## Purity
//! Inputs are plain in-memory rows; there is no I/O and no shared state.
//! Callers re-derive inputs fresh on every request — results are never
//! cached across calls, since a stale roster would silently hide new
//! conflicts.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::NaiveDate;

use crate::dates;
use crate::models::{Person, ShiftAssignment};
use crate::rotation::duty_group_for;

/// Fixed label for the extra-duty program carried on every conflict record.
pub const EXTRA_PROGRAM_LABEL: &str = "PMF";

/// One detected double-booking: the person's home group is on regular duty
/// on the same date as their extra shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Date of the extra shift.
    pub service_date: NaiveDate,
    /// Display name of the double-booked person.
    pub person_name: String,
    /// Display name of the person's home duty group.
    pub home_group_name: &'static str,
    /// Extra-duty program label (always [`EXTRA_PROGRAM_LABEL`]).
    pub program: &'static str,
}

/// Report every assignment inside `[window_start, window_end]` (inclusive)
/// whose person's home duty group equals the rotation group on duty that day.
///
/// - Assignments dated outside the window are ignored, not reported.
/// - Malformed service dates and dangling person references skip just that
///   record.
/// - Output is unique by (date, person) — first occurrence wins — and
///   stably sorted by date for presentation.
pub fn detect_conflicts(
    personnel: &[Person],
    assignments: &[ShiftAssignment],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<Conflict> {
    let by_id: HashMap<i32, &Person> = personnel.iter().map(|p| (p.id, p)).collect();

    let mut seen: HashSet<(NaiveDate, i32)> = HashSet::new();
    let mut out = Vec::new();

    for assignment in assignments {
        let date = match dates::parse_service_date(&assignment.service_date) {
            Ok(d) => d,
            Err(_) => continue, // garbled row; skip it, keep the batch going
        };
        if date < window_start || date > window_end {
            continue;
        }
        let person = match by_id.get(&assignment.person_id) {
            Some(p) => p,
            None => continue, // roster deletion raced this assignment list
        };

        let on_duty = duty_group_for(date);
        if person.duty_group != on_duty.code() {
            continue;
        }
        if !seen.insert((date, person.id)) {
            continue;
        }
        out.push(Conflict {
            service_date: date,
            person_name: person.name.clone(),
            home_group_name: on_duty.name(),
            program: EXTRA_PROGRAM_LABEL,
        });
    }

    out.sort_by_key(|c| c.service_date);
    out
}

/// Plain-text rendering of a detection pass, for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictReport(
    /// The conflicts, already deduped and date-sorted.
    pub Vec<Conflict>,
);

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No conflicts");
        }
        let title = format!("Conflicts ({})", self.0.len());
        writeln!(f, "{title}")?;
        for _ in 0..title.len() {
            write!(f, "-")?;
        }
        writeln!(f)?;
        for c in &self.0 {
            writeln!(
                f,
                "! {}  {}  [{}]  {}",
                c.service_date, c.person_name, c.home_group_name, c.program
            )?;
        }
        Ok(())
    }
}
