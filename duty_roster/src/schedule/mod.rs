//! Shift-assignment repository (SQLite).
//!
//! One explicit surface for everything the scheduling screens need:
//! list the roster, list assignments in a window, put a person on a date,
//! take them off again. The monthly "escala" period containers are created
//! lazily the first time a date in that month is assigned.

use chrono::NaiveDate;

use crate::models::{Person, ShiftAssignment};

/// Maximum number of shift assignments a single calendar date may hold.
pub const DAY_CAPACITY: usize = 3;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while mutating the schedule.
pub enum RepoError {
    #[error("no person with identification code {id_number}")]
    /// The identification code does not match anyone on the roster.
    PersonNotFound {
        /// Identification code that was looked up.
        id_number: String,
    },
    #[error("{id_number} is already assigned on {date}")]
    /// The person already holds an assignment on that date.
    AlreadyAssigned {
        /// Identification code of the person.
        id_number: String,
        /// Date that already holds their assignment.
        date: NaiveDate,
    },
    #[error("{date} already holds {capacity} assignments")]
    /// The date is at [`DAY_CAPACITY`].
    DayFull {
        /// Date that is full.
        date: NaiveDate,
        /// The enforced capacity.
        capacity: usize,
    },
}

/// Result type used throughout the schedule repository for fallible operations.
pub type RepoResult<T> = anyhow::Result<T>;

/// Portable surface; the SQLite implementation lives in `repo.rs`.
pub trait ScheduleRepo {
    /// Lists the whole roster, ordered by name.
    fn list_personnel(&self, conn: &mut diesel::SqliteConnection) -> RepoResult<Vec<Person>>;

    /// Lists assignments dated inside `[window_start, window_end]`
    /// (inclusive), ordered by service date.
    fn list_assignments(
        &self,
        conn: &mut diesel::SqliteConnection,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> RepoResult<Vec<ShiftAssignment>>;

    /// Finds or lazily creates the roster period covering the given month.
    /// Returns its id.
    fn ensure_period(
        &self,
        conn: &mut diesel::SqliteConnection,
        year: i32,
        month: u32,
    ) -> RepoResult<i32>;

    /// Assigns a person (by identification code) to a date.
    ///
    /// Enforces, in one transaction: the person exists, they are not already
    /// on that date, and the date is below [`DAY_CAPACITY`]. Returns the new
    /// assignment id.
    fn assign(
        &self,
        conn: &mut diesel::SqliteConnection,
        id_number: &str,
        date: NaiveDate,
        role: Option<&str>,
    ) -> RepoResult<i32>;

    /// Removes a person's assignment on a date. Returns false when there was
    /// nothing to remove.
    fn unassign(
        &self,
        conn: &mut diesel::SqliteConnection,
        id_number: &str,
        date: NaiveDate,
    ) -> RepoResult<bool>;
}

mod repo;
pub use repo::SqliteRepo;
