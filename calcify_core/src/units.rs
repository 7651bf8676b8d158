//! # Unit Tables and Scales
//!
//! Immutable, process-wide conversion constants shared by the unit and
//! time conversion modules.
//!
//! ## Design Philosophy
//!
//! Length and weight are linearly scalable, so each is a fixed table
//! mapping unit name to its multiplicative factor relative to a base unit
//! (meters, kilograms). Temperature is not linearly scalable (the scales
//! have different zero points), so it is an enum that converts by pivoting
//! through Celsius. Time pivots through seconds.
//!
//! Tables are built once at first use and never mutated, so concurrent
//! readers never race. Unit names are matched case-insensitively.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Length factors relative to one meter
pub static LENGTH_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("meter", 1.0),
        ("kilometer", 1000.0),
        ("centimeter", 0.01),
        ("millimeter", 0.001),
        ("mile", 1609.34),
        ("yard", 0.9144),
        ("foot", 0.3048),
        ("inch", 0.0254),
    ])
});

/// Weight factors relative to one kilogram
pub static WEIGHT_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("kilogram", 1.0),
        ("gram", 0.001),
        ("pound", 0.453592),
        ("ounce", 0.0283495),
    ])
});

/// Look up a unit's factor in a table, failing with `UnsupportedUnit`.
pub fn factor_for(
    table: &HashMap<&'static str, f64>,
    unit: &str,
    category: &str,
) -> CalcResult<f64> {
    table
        .get(unit.to_ascii_lowercase().as_str())
        .copied()
        .ok_or_else(|| CalcError::unsupported_unit(unit, category))
}

/// Temperature scale. Conversion pivots through Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Parse a scale name (case-insensitive), failing with `UnsupportedUnit`.
    pub fn parse(name: &str) -> CalcResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "celsius" => Ok(TemperatureScale::Celsius),
            "fahrenheit" => Ok(TemperatureScale::Fahrenheit),
            "kelvin" => Ok(TemperatureScale::Kelvin),
            _ => Err(CalcError::unsupported_unit(name, "temperature")),
        }
    }

    /// Convert a reading on this scale to Celsius.
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - 273.15,
        }
    }

    /// Convert a Celsius reading to this scale.
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureScale::Kelvin => celsius + 273.15,
        }
    }
}

/// Time unit. Conversion pivots through seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// Parse a unit name (case-insensitive, singular or plural), failing
    /// with `UnsupportedUnit`.
    pub fn parse(name: &str) -> CalcResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "hours" | "hour" => Ok(TimeUnit::Hours),
            "minutes" | "minute" => Ok(TimeUnit::Minutes),
            "seconds" | "second" => Ok(TimeUnit::Seconds),
            _ => Err(CalcError::unsupported_unit(name, "time")),
        }
    }

    /// Seconds in one of this unit
    pub fn seconds_per_unit(self) -> f64 {
        match self {
            TimeUnit::Hours => 3600.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Seconds => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_table() {
        assert_eq!(factor_for(&LENGTH_FACTORS, "Kilometer", "length").unwrap(), 1000.0);
        assert_eq!(factor_for(&LENGTH_FACTORS, "inch", "length").unwrap(), 0.0254);
        let err = factor_for(&LENGTH_FACTORS, "Furlong", "length").unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_UNIT");
    }

    #[test]
    fn test_weight_table() {
        assert_eq!(factor_for(&WEIGHT_FACTORS, "Pound", "weight").unwrap(), 0.453592);
        assert!(factor_for(&WEIGHT_FACTORS, "stone", "weight").is_err());
    }

    #[test]
    fn test_temperature_pivot() {
        let c = TemperatureScale::Celsius;
        let f = TemperatureScale::Fahrenheit;
        let k = TemperatureScale::Kelvin;

        assert_eq!(f.from_celsius(c.to_celsius(0.0)), 32.0);
        assert_eq!(k.from_celsius(c.to_celsius(0.0)), 273.15);
        assert!((c.to_celsius(0.0) - k.to_celsius(273.15)).abs() < 1e-9);
        assert!((f.to_celsius(212.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_parse() {
        assert_eq!(TemperatureScale::parse("Celsius").unwrap(), TemperatureScale::Celsius);
        assert_eq!(TemperatureScale::parse("kelvin").unwrap(), TemperatureScale::Kelvin);
        assert!(TemperatureScale::parse("Rankine").is_err());
    }

    #[test]
    fn test_time_units() {
        assert_eq!(TimeUnit::parse("hours").unwrap().seconds_per_unit(), 3600.0);
        assert_eq!(TimeUnit::parse("Minute").unwrap().seconds_per_unit(), 60.0);
        assert!(TimeUnit::parse("fortnight").is_err());
    }
}
