use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use crate::roster::sync::{read::Current, want::Wanted};

/// What needs to change to make the `personnel` table match the TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterDiff {
    /// Entries to insert or update: id_number -> (name, duty_group).
    /// Entries already stored with identical values are not listed, so a
    /// repeated sync of the same file is a no-op.
    pub upserts: BTreeMap<String, (String, String)>,
    /// Identification codes to delete (prune only).
    pub deletes: BTreeSet<String>,
}

impl RosterDiff {
    /// True if there is nothing to upsert or delete.
    pub fn is_noop(&self) -> bool {
        self.upserts.is_empty() && self.deletes.is_empty()
    }
}

impl fmt::Display for RosterDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // helper: section header with underline
        let mut wrote_any = false;
        let mut section = |title: &str,
                           body: &mut dyn FnMut(&mut fmt::Formatter<'_>) -> fmt::Result|
         -> fmt::Result {
            if wrote_any {
                writeln!(f)?;
            }
            writeln!(f, "{title}")?;
            for _ in 0..title.len() {
                write!(f, "-")?;
            }
            writeln!(f)?;
            body(f)?;
            wrote_any = true;
            Ok(())
        };

        if !self.upserts.is_empty() {
            section("Personnel (UPSERT)", &mut |f| {
                for (code, (name, group)) in &self.upserts {
                    writeln!(f, "+ {code}  \"{name}\"  [{group}]")?;
                }
                Ok(())
            })?;
        }

        if !self.deletes.is_empty() {
            section("Personnel (DELETE)", &mut |f| {
                for code in &self.deletes {
                    writeln!(f, "- {code}")?;
                }
                Ok(())
            })?;
        }

        if !wrote_any {
            write!(f, "No changes")
        } else {
            Ok(())
        }
    }
}

pub fn make_diff(w: &Wanted, c: &Current, prune: bool) -> RosterDiff {
    let mut d = RosterDiff::default();

    // upsert only what is missing or different; makes repeat syncs no-ops
    for (code, entry) in &w.people {
        if c.people.get(code) != Some(entry) {
            d.upserts.insert(code.clone(), entry.clone());
        }
    }

    if prune {
        for code in c.people.keys() {
            if !w.people.contains_key(code) {
                d.deletes.insert(code.clone());
            }
        }
    }

    d
}
