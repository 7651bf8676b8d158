//! # Percentage
//!
//! Computes `obtained / total * 100`. Per the original API this module
//! reports non-numeric inputs as `InvalidInput` rather than
//! `MissingInput`, and rejects a zero total outright.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::params::{Coerced, Params};
use crate::rounding::round2;

/// Input parameters for a percentage calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentageInput {
    /// Denominator, must be non-zero
    pub total: f64,
    /// Numerator
    pub obtained: f64,
}

impl PercentageInput {
    /// Build from raw request parameters.
    pub fn from_params(params: &Params) -> CalcResult<Self> {
        Ok(PercentageInput {
            total: number(params, "total")?,
            obtained: number(params, "obtained")?,
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.total == 0.0 {
            return Err(CalcError::invalid_input(
                "total",
                "0",
                "Total cannot be zero",
            ));
        }
        Ok(())
    }
}

fn number(params: &Params, field: &str) -> CalcResult<f64> {
    match params.coerce(field) {
        Coerced::Value(v) => Ok(v),
        _ => Err(CalcError::invalid_input(
            field,
            params.raw(field).unwrap_or(""),
            "Must be a number",
        )),
    }
}

/// Percentage result, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentageResult {
    pub percentage: f64,
}

/// Calculate the percentage.
pub fn calculate(input: &PercentageInput) -> CalcResult<PercentageResult> {
    input.validate()?;

    Ok(PercentageResult {
        percentage: round2(ensure_finite(
            "percentage",
            input.obtained / input.total * 100.0,
        )?),
    })
}
