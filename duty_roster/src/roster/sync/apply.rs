use diesel::prelude::*;

use crate::roster::repo::{delete_person, upsert_person};
use crate::roster::sync::diff::RosterDiff;

/// Apply the diff inside the current transaction.
/// Deletes cascade each person's shift assignments (FK ON DELETE CASCADE).
pub fn apply_diff(conn: &mut SqliteConnection, diff: &RosterDiff) -> anyhow::Result<()> {
    for (code, (name, group)) in &diff.upserts {
        upsert_person(conn, code, name, group)?;
    }

    for code in &diff.deletes {
        delete_person(conn, code)?;
    }

    Ok(())
}
