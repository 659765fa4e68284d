//! Personnel duty-roster management: a rotating four-group duty calendar,
//! extra-shift assignments, and detection of double-booked personnel.

#![deny(missing_docs)]

pub mod conflict;
pub mod dates;
pub mod db;
pub mod models;
pub mod roster;
pub mod rotation;
pub mod schedule;
/// Diesel table definitions; the authoritative shapes live in `migrations/`.
#[allow(missing_docs)]
pub mod schema;
