use diesel::prelude::*;
use std::collections::BTreeMap;

pub struct Current {
    // id_number -> (name, duty_group)
    pub people: BTreeMap<String, (String, String)>,
}

pub fn read_current(conn: &mut SqliteConnection) -> anyhow::Result<Current> {
    use crate::schema::personnel;

    let people = personnel::table
        .select((
            personnel::id_number,
            personnel::name,
            personnel::duty_group,
        ))
        .load::<(String, String, String)>(conn)?
        .into_iter()
        .map(|(code, name, group)| (code, (name, group)))
        .collect();

    Ok(Current { people })
}
