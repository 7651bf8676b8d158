//! # Provident Fund (PF)
//!
//! Computes employee and employer provident-fund contributions from basic
//! pay plus dearness allowance. Both contribution rates default to the
//! statutory 12% and can be overridden per request.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::params::Params;
use crate::rounding::round2;

/// Statutory default contribution rate, percent
pub const DEFAULT_PF_RATE_PCT: f64 = 12.0;

/// Input parameters for a PF calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PfInput {
    /// Basic pay, must be non-negative
    pub basic: f64,
    /// Dearness allowance, must be non-negative (defaults to 0)
    pub allowance: f64,
    /// Employee contribution rate in percent
    pub employee_rate_pct: f64,
    /// Employer contribution rate in percent
    pub employer_rate_pct: f64,
}

impl PfInput {
    /// Build from raw request parameters (`basic`, optional `da`,
    /// optional `employeeRate`/`employerRate`).
    pub fn from_params(params: &Params) -> CalcResult<Self> {
        Ok(PfInput {
            basic: params.require("basic")?,
            allowance: params.optional("da")?.unwrap_or(0.0),
            employee_rate_pct: params
                .optional("employeeRate")?
                .unwrap_or(DEFAULT_PF_RATE_PCT),
            employer_rate_pct: params
                .optional("employerRate")?
                .unwrap_or(DEFAULT_PF_RATE_PCT),
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.basic < 0.0 {
            return Err(CalcError::invalid_input(
                "basic",
                self.basic.to_string(),
                "Salary values cannot be negative",
            ));
        }
        if self.allowance < 0.0 {
            return Err(CalcError::invalid_input(
                "da",
                self.allowance.to_string(),
                "Salary values cannot be negative",
            ));
        }
        Ok(())
    }
}

/// PF calculation results, all rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PfResult {
    /// Basic pay plus allowance
    pub total_earning: f64,
    /// Employee's monthly contribution
    pub employee_share: f64,
    /// Employer's monthly contribution
    pub employer_share: f64,
    /// Combined monthly contribution
    pub total_contribution: f64,
}

/// Calculate provident-fund contributions.
pub fn calculate(input: &PfInput) -> CalcResult<PfResult> {
    input.validate()?;

    let total_earning = ensure_finite("total_earning", input.basic + input.allowance)?;
    let employee_share =
        ensure_finite("employee_share", total_earning * input.employee_rate_pct / 100.0)?;
    let employer_share =
        ensure_finite("employer_share", total_earning * input.employer_rate_pct / 100.0)?;

    Ok(PfResult {
        total_earning: round2(total_earning),
        employee_share: round2(employee_share),
        employer_share: round2(employer_share),
        total_contribution: round2(ensure_finite(
            "total_contribution",
            employee_share + employer_share,
        )?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let params = Params::new().with("basic", "20000");
        let input = PfInput::from_params(&params).unwrap();
        let result = calculate(&input).unwrap();
        assert_eq!(result.total_earning, 20_000.0);
        assert_eq!(result.employee_share, 2400.0);
        assert_eq!(result.employer_share, 2400.0);
        assert_eq!(result.total_contribution, 4800.0);
    }

    #[test]
    fn test_with_allowance_and_custom_rates() {
        let params = Params::new()
            .with("basic", "15000")
            .with("da", "5000")
            .with("employeeRate", "10")
            .with("employerRate", "12");
        let input = PfInput::from_params(&params).unwrap();
        let result = calculate(&input).unwrap();
        assert_eq!(result.total_earning, 20_000.0);
        assert_eq!(result.employee_share, 2000.0);
        assert_eq!(result.employer_share, 2400.0);
        assert_eq!(result.total_contribution, 4400.0);
    }

    #[test]
    fn test_zero_basic_is_allowed() {
        let input = PfInput {
            basic: 0.0,
            allowance: 0.0,
            employee_rate_pct: DEFAULT_PF_RATE_PCT,
            employer_rate_pct: DEFAULT_PF_RATE_PCT,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.total_contribution, 0.0);
    }

    #[test]
    fn test_overflowing_pay_rejected() {
        let input = PfInput {
            basic: f64::MAX,
            allowance: f64::MAX,
            employee_rate_pct: DEFAULT_PF_RATE_PCT,
            employer_rate_pct: DEFAULT_PF_RATE_PCT,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_pay_rejected() {
        let input = PfInput {
            basic: -100.0,
            allowance: 0.0,
            employee_rate_pct: DEFAULT_PF_RATE_PCT,
            employer_rate_pct: DEFAULT_PF_RATE_PCT,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }
}
