//! Roster synchronization (TOML file -> `personnel` table).
//!
//! ## What this does
//! - Parses a [`Roster`](crate::roster::config::Roster) (TOML) and
//!   **normalizes** it (trimmed codes, lowercase duty groups, dedupe rules).
//! - Computes a **diff** between TOML (desired) and the DB (current).
//! - Applies the diff with UPSERTs (idempotent) and optional **prune**
//!   deletes.
//!
//! ## Transactions & consistency
//! Everything runs inside a single **`BEGIN IMMEDIATE`** transaction via
//! `SqliteConnection::immediate_transaction`. This reduces `SQLITE_BUSY`
//! surprises and ensures we either apply the whole diff or none of it.
//!
//! ## Dry-run
//! When `SyncOptions::dry_run` is `true`, we return the structured
//! [`RosterDiff`] and do **not** write anything. Callers can pretty-print
//! the diff or log it.
//!
//! ## Prune
//! Pruning deletes personnel absent from the TOML. Their shift assignments
//! cascade away with them, which is the documented lifecycle for a deleted
//! person.

mod apply;
mod diff;
mod read;
mod want;

pub use diff::RosterDiff;

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::roster::config::{Roster, normalize_roster};

/// Options for roster synchronization.
pub struct SyncOptions {
    /// If true, compute the diff only; nothing is written.
    pub dry_run: bool,
    /// If true, delete personnel not present in the TOML.
    pub prune: bool,
}

/// Sync a roster file into the `personnel` table.
///
/// Returns the diff that was (or, with dry-run, would have been) applied.
pub fn sync_roster(
    conn: &mut SqliteConnection,
    mut roster: Roster,
    opt: SyncOptions,
) -> anyhow::Result<RosterDiff> {
    let _report = normalize_roster(&mut roster)?;

    let wanted = want::wanted_from_roster(&roster);

    let diff = conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
        let current = read::read_current(conn)?;
        let diff = diff::make_diff(&wanted, &current, opt.prune);
        if !opt.dry_run && !diff.is_noop() {
            apply::apply_diff(conn, &diff)?;
        }
        Ok(diff)
    })?;

    tracing::info!(
        upserts = diff.upserts.len(),
        deletes = diff.deletes.len(),
        dry_run = opt.dry_run,
        "roster sync"
    );

    Ok(diff)
}
