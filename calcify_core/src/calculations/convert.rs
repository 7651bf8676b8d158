//! # Unit Conversion
//!
//! Converts a value between units of length, weight, or temperature.
//! Length and weight use the fixed factor tables in [`crate::units`];
//! temperature pivots through Celsius since its scales have different
//! zero points.
//!
//! ## Example
//!
//! ```rust
//! use calcify_core::calculations::convert::{calculate, ConvertInput};
//! use calcify_core::params::Params;
//!
//! let params = Params::new()
//!     .with("category", "length")
//!     .with("from", "Kilometer")
//!     .with("to", "Meter")
//!     .with("value", "1");
//!
//! let result = calculate(&ConvertInput::from_params(&params).unwrap()).unwrap();
//! assert_eq!(result.result, 1000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::params::Params;
use crate::rounding::round4;
use crate::units::{factor_for, TemperatureScale, LENGTH_FACTORS, WEIGHT_FACTORS};

/// Conversion category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    /// Parse a category name, failing with `UnsupportedCategory`.
    pub fn parse(name: &str) -> CalcResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "weight" => Ok(Category::Weight),
            "temperature" => Ok(Category::Temperature),
            _ => Err(CalcError::unsupported_category(name)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }
}

/// Input parameters for a unit conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertInput {
    pub category: Category,
    /// Source unit name
    pub from: String,
    /// Destination unit name
    pub to: String,
    /// Value in the source unit
    pub value: f64,
}

impl ConvertInput {
    /// Build from raw request parameters.
    pub fn from_params(params: &Params) -> CalcResult<Self> {
        let category = params
            .raw("category")
            .ok_or_else(|| CalcError::missing_input("category"))?;
        let from = params
            .raw("from")
            .ok_or_else(|| CalcError::missing_input("from"))?;
        let to = params
            .raw("to")
            .ok_or_else(|| CalcError::missing_input("to"))?;

        Ok(ConvertInput {
            category: Category::parse(category)?,
            from: from.to_string(),
            to: to.to_string(),
            value: params.require("value")?,
        })
    }
}

/// Unit conversion result. Echoes the request alongside the converted
/// value; `value` and `result` are both rounded to 4 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertResult {
    pub category: Category,
    pub from: String,
    pub to: String,
    pub value: f64,
    pub result: f64,
}

/// Convert a value between two units of the same category.
pub fn calculate(input: &ConvertInput) -> CalcResult<ConvertResult> {
    let result = match input.category {
        Category::Length => linear(&LENGTH_FACTORS, input)?,
        Category::Weight => linear(&WEIGHT_FACTORS, input)?,
        Category::Temperature => {
            let from = TemperatureScale::parse(&input.from)?;
            let to = TemperatureScale::parse(&input.to)?;
            to.from_celsius(from.to_celsius(input.value))
        }
    };

    Ok(ConvertResult {
        category: input.category,
        from: input.from.clone(),
        to: input.to.clone(),
        value: round4(input.value),
        result: round4(ensure_finite("result", result)?),
    })
}

fn linear(
    table: &std::collections::HashMap<&'static str, f64>,
    input: &ConvertInput,
) -> CalcResult<f64> {
    let from_factor = factor_for(table, &input.from, input.category.name())?;
    let to_factor = factor_for(table, &input.to, input.category.name())?;
    Ok(input.value * from_factor / to_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(category: Category, from: &str, to: &str, value: f64) -> CalcResult<ConvertResult> {
        calculate(&ConvertInput {
            category,
            from: from.to_string(),
            to: to.to_string(),
            value,
        })
    }

    #[test]
    fn test_kilometer_to_meter() {
        let result = convert(Category::Length, "Kilometer", "Meter", 1.0).unwrap();
        assert_eq!(result.result, 1000.0);
    }

    #[test]
    fn test_pound_to_kilogram() {
        let result = convert(Category::Weight, "Pound", "Kilogram", 10.0).unwrap();
        assert!((result.result - 4.5359).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_chain() {
        // 0C -> 32F -> 273.15K, pivot-consistent
        let f = convert(Category::Temperature, "Celsius", "Fahrenheit", 0.0).unwrap();
        assert_eq!(f.result, 32.0);

        let k = convert(Category::Temperature, "Fahrenheit", "Kelvin", 32.0).unwrap();
        assert_eq!(k.result, 273.15);

        let c = convert(Category::Temperature, "Kelvin", "Celsius", 273.15).unwrap();
        assert_eq!(c.result, 0.0);
    }

    #[test]
    fn test_round_trip_all_pairs() {
        let tables = [
            (Category::Length, &LENGTH_FACTORS),
            (Category::Weight, &WEIGHT_FACTORS),
        ];
        for (category, table) in tables {
            for from in table.keys() {
                for to in table.keys() {
                    let out = convert(category, from, to, 12.5).unwrap();
                    // Re-convert un-rounded to avoid compounding the 4-decimal rounding
                    let raw_out = 12.5 * table[from] / table[to];
                    let back = raw_out * table[to] / table[from];
                    assert!(
                        (back - 12.5).abs() < 1e-6 * 12.5,
                        "{from}->{to}->{from} drifted: {back}"
                    );
                    assert!(out.result.is_finite());
                }
            }
        }
    }

    #[test]
    fn test_overflowing_conversion_rejected() {
        let err = convert(Category::Length, "Kilometer", "Millimeter", 1e305).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unknown_category() {
        let err = Category::parse("pressure").unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CATEGORY");
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert(Category::Length, "Furlong", "Meter", 1.0).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_UNIT");

        let err = convert(Category::Temperature, "Celsius", "Rankine", 1.0).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_UNIT");
    }

    #[test]
    fn test_missing_value() {
        let params = Params::new()
            .with("category", "length")
            .with("from", "Meter")
            .with("to", "Foot");
        let err = ConvertInput::from_params(&params).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
    }
}
