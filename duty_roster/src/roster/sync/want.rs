use std::collections::BTreeMap;

use crate::roster::config::Roster;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wanted {
    // id_number -> (name, duty_group)
    pub people: BTreeMap<String, (String, String)>,
}

pub fn wanted_from_roster(roster: &Roster) -> Wanted {
    let mut people = BTreeMap::new();

    for (code, cfg) in &roster.personnel {
        people.insert(code.clone(), (cfg.name.clone(), cfg.duty_group.clone()));
    }

    Wanted { people }
}
