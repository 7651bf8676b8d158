//! # Fuel Economy
//!
//! Computes the fuel volume needed for a trip from distance and vehicle
//! consumption, and optionally the estimated cost when a fuel price is
//! supplied.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::params::Params;
use crate::rounding::{round2, round3};

/// Input parameters for a fuel economy calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelInput {
    /// Trip distance
    pub distance: f64,
    /// Distance units per fuel unit (e.g. km per liter)
    pub consumption: f64,
    /// Price per fuel unit; cost is omitted when absent
    pub price_per_unit: Option<f64>,
}

impl FuelInput {
    /// Build from raw request parameters (`distance`, `consumption`,
    /// optional `pricePerUnit`).
    pub fn from_params(params: &Params) -> CalcResult<Self> {
        Ok(FuelInput {
            distance: params.require("distance")?,
            consumption: params.require("consumption")?,
            price_per_unit: params.optional("pricePerUnit")?,
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.consumption == 0.0 {
            return Err(CalcError::invalid_input(
                "consumption",
                "0",
                "Consumption cannot be zero",
            ));
        }
        Ok(())
    }
}

/// Fuel economy results. `estimated_cost` is `null` when no price was
/// supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelResult {
    /// Echoed distance, rounded to 2 decimals
    pub distance: f64,
    /// Echoed consumption, rounded to 2 decimals
    pub consumption: f64,
    /// Fuel volume for the trip, rounded to 3 decimals
    pub liters_needed: f64,
    /// Trip fuel cost, rounded to 2 decimals
    pub estimated_cost: Option<f64>,
}

/// Calculate fuel volume and optional cost for a trip.
pub fn calculate(input: &FuelInput) -> CalcResult<FuelResult> {
    input.validate()?;

    let liters = ensure_finite("liters_needed", input.distance / input.consumption)?;
    let estimated_cost = match input.price_per_unit {
        Some(price) => Some(round2(ensure_finite("estimated_cost", liters * price)?)),
        None => None,
    };

    Ok(FuelResult {
        distance: round2(input.distance),
        consumption: round2(input.consumption),
        liters_needed: round3(liters),
        estimated_cost,
    })
}
