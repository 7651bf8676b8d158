//! # Body-Mass Index
//!
//! Computes BMI in one of three unit modes and attaches the standard WHO
//! category band.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::params::Params;
use crate::rounding::round2;

/// Imperial BMI conversion constant (lb/in² to kg/m²)
const IMPERIAL_FACTOR: f64 = 703.0;

/// Unit mode for weight and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiUnits {
    /// Kilograms and meters (default)
    #[serde(rename = "kg-m")]
    KgM,
    /// Kilograms and centimeters
    #[serde(rename = "kg-cm")]
    KgCm,
    /// Pounds and inches
    #[serde(rename = "lb-in")]
    LbIn,
}

impl BmiUnits {
    /// Parse a unit mode; absence means `kg-m`, anything unrecognized
    /// fails with `UnsupportedUnit`.
    pub fn parse(mode: Option<&str>) -> CalcResult<Self> {
        match mode.map(str::to_ascii_lowercase).as_deref() {
            None | Some("kg-m") => Ok(BmiUnits::KgM),
            Some("kg-cm") => Ok(BmiUnits::KgCm),
            Some("lb-in") => Ok(BmiUnits::LbIn),
            Some(other) => Err(CalcError::unsupported_unit(other, "bmi")),
        }
    }
}

/// Input parameters for a BMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiInput {
    pub weight: f64,
    pub height: f64,
    pub units: BmiUnits,
}

impl BmiInput {
    /// Build from raw request parameters (`weight`, `height`, optional
    /// `unit`).
    pub fn from_params(params: &Params) -> CalcResult<Self> {
        Ok(BmiInput {
            weight: params.require("weight")?,
            height: params.require("height")?,
            units: BmiUnits::parse(params.raw("unit"))?,
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.height <= 0.0 {
            return Err(CalcError::invalid_input(
                "height",
                self.height.to_string(),
                "Height must be positive",
            ));
        }
        if self.weight <= 0.0 {
            return Err(CalcError::invalid_input(
                "weight",
                self.weight.to_string(),
                "Weight must be positive",
            ));
        }
        Ok(())
    }
}

/// BMI result: the index rounded to 2 decimals plus its category band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: String,
}

/// Calculate body-mass index.
pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;

    let bmi = match input.units {
        BmiUnits::KgM => input.weight / (input.height * input.height),
        BmiUnits::KgCm => {
            let meters = input.height / 100.0;
            input.weight / (meters * meters)
        }
        BmiUnits::LbIn => input.weight / (input.height * input.height) * IMPERIAL_FACTOR,
    };
    let bmi = ensure_finite("bmi", bmi)?;

    Ok(BmiResult {
        bmi: round2(bmi),
        category: band(bmi).to_string(),
    })
}

/// WHO category banding.
fn band(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric() {
        let input = BmiInput {
            weight: 70.0,
            height: 1.75,
            units: BmiUnits::KgM,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.bmi, 22.86);
        assert_eq!(result.category, "Normal");
    }

    #[test]
    fn test_centimeters_match_meters() {
        let m = calculate(&BmiInput {
            weight: 70.0,
            height: 1.75,
            units: BmiUnits::KgM,
        })
        .unwrap();
        let cm = calculate(&BmiInput {
            weight: 70.0,
            height: 175.0,
            units: BmiUnits::KgCm,
        })
        .unwrap();
        assert_eq!(m, cm);
    }

    #[test]
    fn test_imperial() {
        // 154 lb at 69 in ~ 22.74
        let result = calculate(&BmiInput {
            weight: 154.0,
            height: 69.0,
            units: BmiUnits::LbIn,
        })
        .unwrap();
        assert!((result.bmi - 22.74).abs() < 0.01);
        assert_eq!(result.category, "Normal");
    }

    #[test]
    fn test_bands() {
        assert_eq!(band(18.49), "Underweight");
        assert_eq!(band(18.5), "Normal");
        assert_eq!(band(24.99), "Normal");
        assert_eq!(band(25.0), "Overweight");
        assert_eq!(band(30.0), "Obese");
    }

    #[test]
    fn test_vanishing_height_rejected() {
        // Small enough that height squared underflows to zero
        let input = BmiInput {
            weight: 70.0,
            height: 1e-200,
            units: BmiUnits::KgM,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_default_unit_mode() {
        let params = Params::new().with("weight", "70").with("height", "1.75");
        let input = BmiInput::from_params(&params).unwrap();
        assert_eq!(input.units, BmiUnits::KgM);
    }

    #[test]
    fn test_unknown_unit_mode() {
        let params = Params::new()
            .with("weight", "70")
            .with("height", "1.75")
            .with("unit", "stone-furlong");
        let err = BmiInput::from_params(&params).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_UNIT");
    }

    #[test]
    fn test_non_numeric_height() {
        let params = Params::new().with("weight", "70").with("height", "tall");
        let err = BmiInput::from_params(&params).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
    }
}
