//! # Age Calculation
//!
//! Computes true calendar age as whole (years, months, days) elapsed from
//! a date of birth, rather than an elapsed-day count: whole months are
//! counted by monthly anniversaries (clamped to month end, so a Jan 31
//! birth has its February anniversary on Feb 28/29), and days are counted
//! from the last anniversary on or before the reference date. The day
//! component is therefore always in range for the calendar month.
//!
//! The wall clock is read once per call; [`calculate_at`] takes the
//! reference date explicitly so the computation itself stays pure.

use chrono::{Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::params::Params;

/// Input parameters for an age calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeInput {
    /// Date of birth
    pub dob: NaiveDate,
}

impl AgeInput {
    /// Build from raw request parameters (`dob` as `YYYY-MM-DD`).
    pub fn from_params(params: &Params) -> CalcResult<Self> {
        let raw = params
            .raw("dob")
            .ok_or_else(|| CalcError::missing_input("dob"))?;

        let dob = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            CalcError::invalid_input("dob", raw, "Expected a calendar date (YYYY-MM-DD)")
        })?;

        Ok(AgeInput { dob })
    }
}

/// Age result: whole calendar years, months, and days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeResult {
    pub dob: NaiveDate,
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Calculate age as of today (UTC).
pub fn calculate(input: &AgeInput) -> CalcResult<AgeResult> {
    calculate_at(input, Utc::now().date_naive())
}

/// Calculate age as of an explicit reference date.
///
/// Counts whole months elapsed via clamped monthly anniversaries, then
/// days from the last anniversary on or before `today`. Clamping keeps
/// the day component non-negative even when the birth day-of-month
/// exceeds the length of the month before `today` (e.g. a Jan 31 birth
/// evaluated on Mar 1).
pub fn calculate_at(input: &AgeInput, today: NaiveDate) -> CalcResult<AgeResult> {
    if input.dob > today {
        return Err(CalcError::invalid_input(
            "dob",
            input.dob.to_string(),
            "Date of birth is in the future",
        ));
    }

    let mut whole_months = (today.year() - input.dob.year()) * 12
        + (today.month() as i32 - input.dob.month() as i32);
    if anniversary(input.dob, whole_months) > today {
        whole_months -= 1;
    }

    // dob <= today, so whole_months >= 0 after the correction
    let last_anniversary = anniversary(input.dob, whole_months);
    let days = today.signed_duration_since(last_anniversary).num_days() as i32;

    Ok(AgeResult {
        dob: input.dob,
        years: whole_months / 12,
        months: whole_months % 12,
        days,
    })
}

/// The dob's nth monthly anniversary, clamped to month end.
fn anniversary(dob: NaiveDate, months: i32) -> NaiveDate {
    if months <= 0 {
        return dob;
    }
    // Only fails past NaiveDate::MAX, which a dob <= today cannot reach
    dob.checked_add_months(Months::new(months as u32))
        .unwrap_or(dob)
}
