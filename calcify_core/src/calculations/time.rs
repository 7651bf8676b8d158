//! # Time Unit Conversion
//!
//! Converts between hours, minutes, and seconds by pivoting through
//! seconds.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::params::Params;
use crate::rounding::round4;
use crate::units::TimeUnit;

/// Input parameters for a time conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeInput {
    pub value: f64,
    pub from: TimeUnit,
    pub to: TimeUnit,
}

impl TimeInput {
    /// Build from raw request parameters (`value`, `from`, `to`).
    pub fn from_params(params: &Params) -> CalcResult<Self> {
        let from = params
            .raw("from")
            .ok_or_else(|| CalcError::missing_input("from"))?;
        let to = params
            .raw("to")
            .ok_or_else(|| CalcError::missing_input("to"))?;

        Ok(TimeInput {
            value: params.require("value")?,
            from: TimeUnit::parse(from)?,
            to: TimeUnit::parse(to)?,
        })
    }
}

/// Time conversion result; `value` and `result` rounded to 4 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeResult {
    pub value: f64,
    pub from: TimeUnit,
    pub to: TimeUnit,
    pub result: f64,
}

/// Convert a time value between units.
pub fn calculate(input: &TimeInput) -> CalcResult<TimeResult> {
    let seconds = input.value * input.from.seconds_per_unit();
    let result = ensure_finite("result", seconds / input.to.seconds_per_unit())?;

    Ok(TimeResult {
        value: round4(input.value),
        from: input.from,
        to: input.to,
        result: round4(result),
    })
}
