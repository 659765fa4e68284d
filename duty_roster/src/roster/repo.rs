//! Personnel upsert/delete statements.
use diesel::prelude::*;
use diesel::{ExpressionMethods, RunQueryDsl, SqliteConnection, insert_into};

use crate::models::NewPerson;
use crate::schema::personnel;

/// Upsert a person by identification code.
///
/// An existing row keeps its id (and therefore its shift assignments);
/// only the name and duty group are updated.
pub fn upsert_person(
    conn: &mut SqliteConnection,
    id_number_: &str,
    name_: &str,
    duty_group_: &str,
) -> anyhow::Result<usize> {
    let row = NewPerson {
        name: name_,
        duty_group: duty_group_,
        id_number: id_number_,
    };
    let n = insert_into(personnel::table)
        .values(&row)
        .on_conflict(personnel::id_number)
        .do_update()
        .set((
            personnel::name.eq(name_),
            personnel::duty_group.eq(duty_group_),
        ))
        .execute(conn)?;
    Ok(n)
}

/// Delete a person by identification code.
///
/// Their shift assignments go with them (`ON DELETE CASCADE`).
pub fn delete_person(conn: &mut SqliteConnection, id_number_: &str) -> anyhow::Result<usize> {
    use crate::schema::personnel::dsl as p;
    let n = diesel::delete(p::personnel.filter(p::id_number.eq(id_number_))).execute(conn)?;
    Ok(n)
}
