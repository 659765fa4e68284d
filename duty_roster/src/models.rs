//! Diesel models mapping to the database schema.
//!
//! These types mirror the tables defined in the embedded migrations and in
//! [`crate::schema`] for use with Diesel’s Queryable/Insertable APIs:
//! - [`crate::schema::personnel`] — the roster: one row per tracked person
//! - [`crate::schema::roster_period`] — monthly "escala" containers
//! - [`crate::schema::shift_assignment`] — one person on extra duty on one date
//!
//! See migrations for constraints (e.g., `UNIQUE(person_id, service_date)`
//! and `ON DELETE CASCADE` FKs). The query-side structs are plain data and
//! are also what the conflict detector consumes, so unit tests can build
//! them without touching a database.

use crate::schema::*;
use diesel::prelude::*;

/// A row in [`crate::schema::personnel`]: one person on the roster.
#[derive(Debug, Clone, Queryable, Identifiable, AsChangeset, Selectable)]
#[diesel(table_name = personnel, check_for_backend(diesel::sqlite::Sqlite))]
pub struct Person {
    /// Database primary key (SQLite INTEGER PRIMARY KEY rowid). Populated by the DB.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Home duty group code ("alfa" | "bravo" | "charlie" | "expediente");
    /// CHECKed by the schema, matched against the rotation clock's codes.
    pub duty_group: String,
    /// External identification code; unique across the roster.
    pub id_number: String,
    /// Row creation timestamp (SQLite CURRENT_TIMESTAMP).
    pub created_at: String,
}

/// Insertable form of [`Person`] for roster intake.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = personnel)]
pub struct NewPerson<'a> {
    /// Display name.
    pub name: &'a str,
    /// Home duty group code; must be one of the four rotation codes.
    pub duty_group: &'a str,
    /// External identification code (unique).
    pub id_number: &'a str,
}

/// A row in [`crate::schema::roster_period`]: an administrative "escala"
/// grouping of assignments over a labeled date range.
///
/// Created lazily (one per calendar month) and never mutated afterwards.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = roster_period, check_for_backend(diesel::sqlite::Sqlite))]
pub struct RosterPeriod {
    /// Database primary key.
    pub id: i32,
    /// Label, e.g. "Escala 2025-01".
    pub title: String,
    /// Inclusive range start (`YYYY-MM-DD`).
    pub start_date: String,
    /// Inclusive range end (`YYYY-MM-DD`).
    pub end_date: String,
    /// Row creation timestamp.
    pub created_at: String,
}

/// Insertable form of [`RosterPeriod`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = roster_period)]
pub struct NewRosterPeriod<'a> {
    /// Label, e.g. "Escala 2025-01".
    pub title: &'a str,
    /// Inclusive range start (`YYYY-MM-DD`).
    pub start_date: &'a str,
    /// Inclusive range end (`YYYY-MM-DD`).
    pub end_date: &'a str,
}

/// A row in [`crate::schema::shift_assignment`]: one person scheduled for
/// extra duty on one calendar date.
///
/// Unique per (person, date); removed via FK cascade when the person or the
/// containing period is deleted.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable)]
#[diesel(table_name = shift_assignment, check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(Person, foreign_key = person_id))]
#[diesel(belongs_to(RosterPeriod, foreign_key = period_id))]
pub struct ShiftAssignment {
    /// Database primary key.
    pub id: i32,
    /// FK to [`RosterPeriod::id`].
    pub period_id: i32,
    /// FK to [`Person::id`].
    pub person_id: i32,
    /// Service date as a `YYYY-MM-DD` string. Day granularity only; the
    /// conflict detector skips rows whose value does not parse.
    pub service_date: String,
    /// Optional free-text role for the shift.
    pub role: Option<String>,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// Row creation timestamp.
    pub created_at: String,
}

/// Insertable form of [`ShiftAssignment`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = shift_assignment)]
pub struct NewShiftAssignment<'a> {
    /// FK to [`RosterPeriod::id`].
    pub period_id: i32,
    /// FK to [`Person::id`].
    pub person_id: i32,
    /// Service date (`YYYY-MM-DD`).
    pub service_date: &'a str,
    /// Optional free-text role.
    pub role: Option<&'a str>,
    /// Optional free-text notes.
    pub notes: Option<&'a str>,
}
