//! # Salary Normalization
//!
//! Two distinct conversions share one endpoint in the original API:
//! annual-salary-to-hourly-rate, and gross-salary aggregation from pay
//! components. The mode is modeled as a tagged union rather than sniffed
//! from whichever keys happen to be non-zero; an explicit `mode` parameter
//! selects the variant, with presence-based detection kept only as a
//! fallback for the original parameter sets.
//!
//! The historical sources disagreed on the weeks-per-year constant (50 vs
//! 52). The canonical value here is [`DEFAULT_WEEKS_PER_YEAR`] = 50
//! (a working year with two weeks off); callers can override it with the
//! `weeks` parameter.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::params::Params;
use crate::rounding::round2;

/// Canonical working weeks per year for hourly-rate conversion
pub const DEFAULT_WEEKS_PER_YEAR: f64 = 50.0;

/// Input parameters for a salary calculation, one variant per mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SalaryInput {
    /// Convert an annual salary to an hourly rate
    Hourly {
        /// Annual salary, must be positive
        annual: f64,
        /// Working hours per week, must be positive
        hours_per_week: f64,
        /// Working weeks per year, must be positive
        weeks_per_year: f64,
    },
    /// Aggregate gross salary from pay components, each non-negative
    Gross {
        basic: f64,
        hra: f64,
        da: f64,
        bonus: f64,
    },
}

impl SalaryInput {
    /// Build from raw request parameters.
    ///
    /// An explicit `mode=hourly` or `mode=gross` selects the variant.
    /// Without it, the presence of `annual` or `hours` selects hourly and
    /// the presence of any gross component selects gross. When neither
    /// parameter set is satisfiable the failure names both.
    pub fn from_params(params: &Params) -> CalcResult<Self> {
        match params.raw("mode") {
            Some(mode) if mode.eq_ignore_ascii_case("hourly") => Self::hourly_from(params),
            Some(mode) if mode.eq_ignore_ascii_case("gross") => Self::gross_from(params),
            Some(mode) => Err(CalcError::invalid_input(
                "mode",
                mode,
                "Expected 'hourly' or 'gross'",
            )),
            None => {
                if params.coerce("annual").is_value() || params.coerce("hours").is_value() {
                    Self::hourly_from(params)
                } else if ["basic", "hra", "da", "bonus"]
                    .iter()
                    .any(|p| params.coerce(p).is_value())
                {
                    Self::gross_from(params)
                } else {
                    Err(CalcError::missing_input(
                        "annual+hours (hourly mode) or basic/hra/da/bonus (gross mode)",
                    ))
                }
            }
        }
    }

    fn hourly_from(params: &Params) -> CalcResult<Self> {
        Ok(SalaryInput::Hourly {
            annual: params.require("annual")?,
            hours_per_week: params.require("hours")?,
            weeks_per_year: params.optional("weeks")?.unwrap_or(DEFAULT_WEEKS_PER_YEAR),
        })
    }

    fn gross_from(params: &Params) -> CalcResult<Self> {
        Ok(SalaryInput::Gross {
            basic: params.optional("basic")?.unwrap_or(0.0),
            hra: params.optional("hra")?.unwrap_or(0.0),
            da: params.optional("da")?.unwrap_or(0.0),
            bonus: params.optional("bonus")?.unwrap_or(0.0),
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            SalaryInput::Hourly {
                annual,
                hours_per_week,
                weeks_per_year,
            } => {
                if annual <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "annual",
                        annual.to_string(),
                        "Annual salary must be positive",
                    ));
                }
                if hours_per_week <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "hours",
                        hours_per_week.to_string(),
                        "Working hours must be positive",
                    ));
                }
                if weeks_per_year <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "weeks",
                        weeks_per_year.to_string(),
                        "Working weeks must be positive",
                    ));
                }
            }
            SalaryInput::Gross {
                basic,
                hra,
                da,
                bonus,
            } => {
                for (field, value) in [("basic", basic), ("hra", hra), ("da", da), ("bonus", bonus)]
                {
                    if value < 0.0 {
                        return Err(CalcError::invalid_input(
                            field,
                            value.to_string(),
                            "Salary components cannot be negative",
                        ));
                    }
                }
                if basic + hra + da + bonus == 0.0 {
                    return Err(CalcError::invalid_input(
                        "basic/hra/da/bonus",
                        "0",
                        "At least one salary component must be non-zero",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Salary calculation results, shape depending on the selected mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryResult {
    Hourly {
        /// The weeks-per-year constant used
        weeks_per_year: f64,
        /// Hours worked per year
        annual_working_hours: f64,
        /// Resulting hourly rate, rounded to 2 decimals
        hourly_rate: f64,
    },
    Gross {
        /// Sum of all components, rounded to 2 decimals
        gross_salary: f64,
    },
}

/// Calculate the salary normalization for the selected mode.
pub fn calculate(input: &SalaryInput) -> CalcResult<SalaryResult> {
    input.validate()?;

    match *input {
        SalaryInput::Hourly {
            annual,
            hours_per_week,
            weeks_per_year,
        } => {
            let annual_working_hours =
                ensure_finite("annual_working_hours", weeks_per_year * hours_per_week)?;
            Ok(SalaryResult::Hourly {
                weeks_per_year,
                annual_working_hours: round2(annual_working_hours),
                hourly_rate: round2(ensure_finite(
                    "hourly_rate",
                    annual / annual_working_hours,
                )?),
            })
        }
        SalaryInput::Gross {
            basic,
            hra,
            da,
            bonus,
        } => Ok(SalaryResult::Gross {
            gross_salary: round2(ensure_finite("gross_salary", basic + hra + da + bonus)?),
        }),
    }
}
