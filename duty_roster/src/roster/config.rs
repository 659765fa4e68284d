//! Roster configuration: parsing, normalization, and loading.
//!
//! A TOML-backed roster file describes everyone who can be scheduled:
//! one entry per person, keyed by their external identification code,
//! carrying the display name and the home duty-group code.
//!
//! Key behaviors:
//! - Normalization trims identification codes and names, lowercases
//!   duty-group codes, and rejects entries that collide or end up empty.
//! - Entries whose duty group is not one of the four rotation codes can be
//!   dropped or treated as an error via [`UnknownDutyGroupPolicy`].
//!
//! Entrypoints:
//! - Parse + normalize from a TOML string: [`load_roster_str`]
//! - Parse + normalize from a file path: [`load_roster_path`]
//! - Normalization with explicit policy: [`normalize_roster_with_policy`]
//! - Back-compat wrapper (drop unknown duty groups): [`normalize_roster`]
//!
//! The normalized shape is what [`crate::roster::sync`] feeds into the
//! `personnel` table.

use anyhow::{Context, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use toml::from_str;

use crate::rotation;

/// Top-level roster mapping identification codes to person entries.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    /// Map of identification code -> person entry.
    ///
    /// The code is trimmed by [`normalize_roster_with_policy`]; order is
    /// preserved from the file.
    pub personnel: IndexMap<String, PersonCfg>,
}

/// One roster entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PersonCfg {
    /// Display name.
    pub name: String,
    /// Home duty-group code ("alfa" | "bravo" | "charlie" | "expediente");
    /// lowercased during normalization.
    pub duty_group: String,
}

/// Summary of changes performed during normalization.
#[derive(Debug, Default)]
pub struct NormalizationReport {
    /// Number of identification codes that changed when trimming.
    pub id_numbers_trimmed: usize,
    /// Number of duty-group codes that changed when trimming/lowercasing.
    pub duty_groups_normalized: usize,
    /// Count of entries dropped due to an unknown duty group (Drop policy).
    pub unknown_duty_group_dropped: usize,
}

/// Policy for roster entries whose duty group is not a rotation code.
#[derive(Copy, Clone, Debug)]
pub enum UnknownDutyGroupPolicy {
    /// Drop entries whose duty group is not one of the four rotation codes.
    Drop,
    /// Treat as an error.
    Error,
}

/// Normalize a roster in-place with an explicit policy for unknown duty groups.
///
/// What normalization does:
/// - Trim identification codes; reject empties and duplicates after trimming
/// - Trim names; reject empties
/// - Trim + lowercase duty-group codes and check them against the four
///   rotation codes (`Drop` vs `Error` for anything else)
///
/// Returns a [`NormalizationReport`] detailing the changes made.
pub fn normalize_roster_with_policy(
    roster: &mut Roster,
    policy: UnknownDutyGroupPolicy,
) -> anyhow::Result<NormalizationReport> {
    let mut report = NormalizationReport::default();

    let mut rebuilt: IndexMap<String, PersonCfg> = IndexMap::new();
    let old = std::mem::take(&mut roster.personnel);

    for (raw_code, mut cfg) in old {
        let id_number = raw_code.trim().to_string();
        if id_number.is_empty() {
            bail!("identification code cannot be empty after trimming");
        }
        if id_number != raw_code {
            report.id_numbers_trimmed += 1;
        }
        if rebuilt.contains_key(&id_number) {
            bail!("duplicate identification code after normalization: {id_number}");
        }

        cfg.name = cfg.name.trim().to_string();
        if cfg.name.is_empty() {
            bail!("name cannot be empty after trimming ({id_number})");
        }

        let group = cfg.duty_group.trim().to_lowercase();
        if group != cfg.duty_group {
            report.duty_groups_normalized += 1;
        }
        if rotation::db::from_db_code(&group).is_err() {
            match policy {
                UnknownDutyGroupPolicy::Drop => {
                    report.unknown_duty_group_dropped += 1;
                    continue;
                }
                UnknownDutyGroupPolicy::Error => {
                    bail!(
                        "duty group '{}' for {id_number} is not a rotation group",
                        cfg.duty_group
                    );
                }
            }
        }
        cfg.duty_group = group;

        rebuilt.insert(id_number, cfg);
    }

    roster.personnel = rebuilt;
    Ok(report)
}

/// This calls [`normalize_roster_with_policy`] using
/// [`UnknownDutyGroupPolicy::Drop`] so that entries with unknown duty groups
/// are silently dropped.
pub fn normalize_roster(roster: &mut Roster) -> anyhow::Result<NormalizationReport> {
    normalize_roster_with_policy(roster, UnknownDutyGroupPolicy::Drop)
}

/// Parse and normalize a roster from a TOML string.
pub fn load_roster_str(toml_str: &str) -> anyhow::Result<Roster> {
    let mut roster: Roster = from_str(toml_str).context("failed to parse roster TOML")?;
    let _report = normalize_roster(&mut roster).context("normalize_roster failed")?;
    Ok(roster)
}

/// Read a roster TOML file from disk, parse, and normalize it.
///
/// See [`load_roster_str`] for details on parsing and normalization.
pub fn load_roster_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<Roster> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read roster file {}", path.as_ref().display()))?;
    load_roster_str(&text)
}
