//! Calendar-date parsing and window helpers.
//!
//! Service dates travel through the system as `YYYY-MM-DD` strings (no time,
//! no zone). [`parse_service_date`] is deliberately strict about that shape:
//! a stored value like `06/01/2025` or `2025-1-6` is rejected so callers can
//! decide to skip the record instead of silently reinterpreting it.

use anyhow::{Context, bail};
use chrono::{Datelike, NaiveDate};

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_service_date(s: &str) -> anyhow::Result<NaiveDate> {
    let t = s.trim();
    // shape first: exactly ten chars, dashes in the right slots
    if t.len() != 10 || t.as_bytes()[4] != b'-' || t.as_bytes()[7] != b'-' {
        bail!("bad service date shape: {s}");
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d").with_context(|| format!("bad service date: {s}"))
}

/// Format a date back to the `YYYY-MM-DD` wire/storage shape.
pub fn format_service_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM` month selector (CLI input).
pub fn parse_month(s: &str) -> anyhow::Result<(i32, u32)> {
    let t = s.trim();
    if t.len() != 7 || t.as_bytes()[4] != b'-' {
        bail!("bad month shape (want YYYY-MM): {s}");
    }
    let year: i32 = t[..4].parse().with_context(|| format!("bad year in {s}"))?;
    let month: u32 = t[5..].parse().with_context(|| format!("bad month in {s}"))?;
    if !(1..=12).contains(&month) {
        bail!("month out of range: {s}");
    }
    Ok((year, month))
}

/// First and last day of a calendar month, both inclusive.
pub fn month_bounds(year: i32, month: u32) -> anyhow::Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("invalid month {year:04}-{month:02}"))?;
    let next_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .with_context(|| format!("invalid month after {year:04}-{month:02}"))?;
    let end = next_start
        .pred_opt()
        .with_context(|| format!("no last day for {year:04}-{month:02}"))?;
    Ok((start, end))
}

/// `"Escala YYYY-MM"`, the title given to lazily created monthly periods.
pub fn month_title(date: NaiveDate) -> String {
    format!("Escala {:04}-{:02}", date.year(), date.month())
}
