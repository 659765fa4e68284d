//! rotation.rs — perpetual 4-day duty-group cycle
//!
//! - One fixed anchor: 2025-01-02, the first Alfa day.
//! - Day 0 → Alfa, day 1 → Bravo, day 2 → Charlie, day 3 → Expediente,
//!   then the cycle repeats.
//! - Dates before the anchor resolve through floor-style modulo, so the
//!   cycle extends backwards without a discontinuity.
//!
//! All functions work on plain calendar dates; there is no time-of-day
//! component anywhere in the cycle.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// First day of the cycle (an Alfa day). Baked in; prior schedules were
/// computed against this exact date and must keep resolving identically.
pub const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 2) {
    Some(d) => d,
    None => panic!("reference date is a valid calendar date"),
};

/// One of the four duty groups in the rotation cycle (serde snake_case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyGroup {
    /// First rotation group.
    Alfa,
    /// Second rotation group.
    Bravo,
    /// Third rotation group.
    Charlie,
    /// Day-shift group, fourth slot of the cycle.
    Expediente,
}

/// The fixed cycle order. Index i holds the group on duty i days after
/// [`REFERENCE_DATE`].
pub const CYCLE: [DutyGroup; 4] = [
    DutyGroup::Alfa,
    DutyGroup::Bravo,
    DutyGroup::Charlie,
    DutyGroup::Expediente,
];

impl DutyGroup {
    /// Position of this group in the cycle (0..=3).
    pub const fn cycle_index(self) -> u8 {
        match self {
            DutyGroup::Alfa => 0,
            DutyGroup::Bravo => 1,
            DutyGroup::Charlie => 2,
            DutyGroup::Expediente => 3,
        }
    }

    /// Stable lowercase code, the value stored in `personnel.duty_group`.
    pub const fn code(self) -> &'static str {
        match self {
            DutyGroup::Alfa => "alfa",
            DutyGroup::Bravo => "bravo",
            DutyGroup::Charlie => "charlie",
            DutyGroup::Expediente => "expediente",
        }
    }

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        match self {
            DutyGroup::Alfa => "Alfa",
            DutyGroup::Bravo => "Bravo",
            DutyGroup::Charlie => "Charlie",
            DutyGroup::Expediente => "Expediente",
        }
    }
}

/// Which group is on regular duty on `date`.
///
/// Pure and total: the signed whole-day distance from [`REFERENCE_DATE`] is
/// reduced with `rem_euclid`, so pre-anchor dates land on the right slot too.
pub fn duty_group_for(date: NaiveDate) -> DutyGroup {
    let diff_days = date.signed_duration_since(REFERENCE_DATE).num_days();
    CYCLE[diff_days.rem_euclid(4) as usize]
}

/// DB round-trip helpers for the stored group code (TEXT column).
pub mod db {
    use anyhow::bail;

    use super::*;

    /// Code written to the `duty_group` column.
    pub fn to_db_code(group: DutyGroup) -> &'static str {
        group.code()
    }

    /// Parse a stored group code back into a [`DutyGroup`].
    pub fn from_db_code(code: &str) -> anyhow::Result<DutyGroup> {
        match code {
            "alfa" => Ok(DutyGroup::Alfa),
            "bravo" => Ok(DutyGroup::Bravo),
            "charlie" => Ok(DutyGroup::Charlie),
            "expediente" => Ok(DutyGroup::Expediente),
            _ => bail!("unknown duty group code: {code}"),
        }
    }
}

impl fmt::Display for DutyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DutyGroup {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // accept the stored code in any case ("Alfa", "ALFA", "alfa")
        db::from_db_code(&s.trim().to_lowercase())
    }
}
