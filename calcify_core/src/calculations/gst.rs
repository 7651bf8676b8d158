//! # Tax (GST)
//!
//! Splits an amount into net, tax, and gross components at a given GST
//! rate. The amount may be tax-inclusive (tax is backed out of it) or
//! tax-exclusive (tax is added on top).

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::params::Params;
use crate::rounding::round2;

/// Input parameters for a GST calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GstInput {
    /// Amount to tax, must be positive
    pub amount: f64,
    /// GST rate in percent, must be non-negative
    pub rate_pct: f64,
    /// True when `amount` already includes GST
    pub inclusive: bool,
}

impl GstInput {
    /// Build from raw request parameters.
    ///
    /// The flag is read from `inclusive`, falling back to the original
    /// API's `isInclusive` spelling.
    pub fn from_params(params: &Params) -> CalcResult<Self> {
        Ok(GstInput {
            amount: params.require("amount")?,
            rate_pct: params.require("rate")?,
            inclusive: params.flag("inclusive") || params.flag("isInclusive"),
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.amount <= 0.0 {
            return Err(CalcError::invalid_input(
                "amount",
                self.amount.to_string(),
                "Amount must be positive",
            ));
        }
        if self.rate_pct < 0.0 {
            return Err(CalcError::invalid_input(
                "rate",
                self.rate_pct.to_string(),
                "Rate must be non-negative",
            ));
        }
        Ok(())
    }
}

/// GST calculation results, all rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstResult {
    /// The tax component
    pub gst_amount: f64,
    /// Amount before tax
    pub net_amount: f64,
    /// Amount after tax
    pub gross_amount: f64,
}

/// Calculate the GST split for an amount.
pub fn calculate(input: &GstInput) -> CalcResult<GstResult> {
    input.validate()?;

    let rate = input.rate_pct / 100.0;

    let (gst_amount, net_amount, gross_amount) = if input.inclusive {
        let net = input.amount / (1.0 + rate);
        (input.amount - net, net, input.amount)
    } else {
        let tax = input.amount * rate;
        (tax, input.amount, input.amount + tax)
    };

    Ok(GstResult {
        gst_amount: round2(ensure_finite("gst_amount", gst_amount)?),
        net_amount: round2(ensure_finite("net_amount", net_amount)?),
        gross_amount: round2(ensure_finite("gross_amount", gross_amount)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive() {
        let input = GstInput {
            amount: 1000.0,
            rate_pct: 18.0,
            inclusive: false,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.gst_amount, 180.0);
        assert_eq!(result.net_amount, 1000.0);
        assert_eq!(result.gross_amount, 1180.0);
    }

    #[test]
    fn test_inclusive() {
        let input = GstInput {
            amount: 1180.0,
            rate_pct: 18.0,
            inclusive: true,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.net_amount, 1000.0);
        assert_eq!(result.gst_amount, 180.0);
        assert_eq!(result.gross_amount, 1180.0);
    }

    #[test]
    fn test_zero_rate() {
        let input = GstInput {
            amount: 500.0,
            rate_pct: 0.0,
            inclusive: false,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.gst_amount, 0.0);
        assert_eq!(result.gross_amount, 500.0);
    }

    #[test]
    fn test_overflowing_amount_rejected() {
        let input = GstInput {
            amount: f64::MAX,
            rate_pct: 100.0,
            inclusive: false,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_amount() {
        let input = GstInput {
            amount: -10.0,
            rate_pct: 18.0,
            inclusive: false,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_from_params_inclusive_spellings() {
        let params = Params::new()
            .with("amount", "1180")
            .with("rate", "18")
            .with("isInclusive", "true");
        assert!(GstInput::from_params(&params).unwrap().inclusive);

        let params = Params::new()
            .with("amount", "1180")
            .with("rate", "18")
            .with("inclusive", "true");
        assert!(GstInput::from_params(&params).unwrap().inclusive);
    }
}
