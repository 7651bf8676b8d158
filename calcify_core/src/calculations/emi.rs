//! # Loan Amortization (EMI)
//!
//! Computes the equated monthly installment for a loan using the standard
//! amortization formula, plus total interest and total payment over the
//! tenure.
//!
//! ## Example
//!
//! ```rust
//! use calcify_core::calculations::emi::{calculate, EmiInput};
//!
//! let input = EmiInput {
//!     principal: 100_000.0,
//!     annual_rate_pct: 10.0,
//!     tenure_months: 12,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.emi, 8791.59);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::params::{Coerced, Params};
use crate::rounding::round2;

/// Input parameters for an EMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    /// Loan principal, must be positive
    pub principal: f64,
    /// Annual interest rate in percent, must be non-negative
    pub annual_rate_pct: f64,
    /// Loan tenure in whole months, must be positive
    pub tenure_months: i64,
}

impl EmiInput {
    /// Build from raw request parameters.
    ///
    /// Tenure comes from `months`, or from whole `years` multiplied by 12
    /// when `months` is absent. `months` wins when both are supplied.
    pub fn from_params(params: &Params) -> CalcResult<Self> {
        let principal = params.require("principal")?;
        let annual_rate_pct = params.require("rate")?;

        let tenure_months = match params.coerce("months") {
            Coerced::Value(_) => params.require_int("months")?,
            Coerced::Invalid => return Err(CalcError::missing_input("months")),
            Coerced::Missing => match params.coerce("years") {
                Coerced::Value(_) => {
                    let years = params.require_int("years")?;
                    years.checked_mul(12).ok_or_else(|| {
                        CalcError::invalid_input(
                            "years",
                            years.to_string(),
                            "Tenure is out of range",
                        )
                    })?
                }
                _ => return Err(CalcError::missing_input("months or years")),
            },
        };

        Ok(EmiInput {
            principal,
            annual_rate_pct,
            tenure_months,
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.principal <= 0.0 {
            return Err(CalcError::invalid_input(
                "principal",
                self.principal.to_string(),
                "Principal must be positive",
            ));
        }
        if self.annual_rate_pct < 0.0 {
            return Err(CalcError::invalid_input(
                "rate",
                self.annual_rate_pct.to_string(),
                "Rate must be non-negative",
            ));
        }
        if self.tenure_months <= 0 {
            return Err(CalcError::invalid_input(
                "months",
                self.tenure_months.to_string(),
                "Tenure must be positive",
            ));
        }
        Ok(())
    }
}

/// EMI calculation results, all rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiResult {
    /// Equated monthly installment
    pub emi: f64,
    /// Interest paid over the full tenure
    pub total_interest: f64,
    /// Principal plus interest over the full tenure
    pub total_payment: f64,
}

/// Calculate the EMI for a loan.
///
/// Monthly rate r = annual rate / 1200. A zero rate degenerates to a
/// straight principal split with zero interest; otherwise the standard
/// amortization formula applies:
///
/// `emi = P * r * (1+r)^n / ((1+r)^n - 1)`
pub fn calculate(input: &EmiInput) -> CalcResult<EmiResult> {
    input.validate()?;

    let n = input.tenure_months as f64;
    let monthly_rate = input.annual_rate_pct / 1200.0;

    if monthly_rate == 0.0 {
        return Ok(EmiResult {
            emi: round2(input.principal / n),
            total_interest: 0.0,
            total_payment: round2(input.principal),
        });
    }

    let growth = (1.0 + monthly_rate).powf(n);
    let emi = ensure_finite("emi", input.principal * monthly_rate * growth / (growth - 1.0))?;
    let total_payment = ensure_finite("total_payment", emi * n)?;

    Ok(EmiResult {
        emi: round2(emi),
        total_interest: round2(total_payment - input.principal),
        total_payment: round2(total_payment),
    })
}
