//! # Formula Modules
//!
//! This module contains every calculation the engine exposes. Each
//! calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable), with
//!   `from_params(&Params)` for raw request parameters
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation
//!   function
//!
//! No formula module depends on another; each is independently testable.
//!
//! ## Available Calculations
//!
//! - [`emi`] - Loan amortization (equated monthly installment)
//! - [`gst`] - GST tax split (inclusive/exclusive)
//! - [`pf`] - Provident fund contributions
//! - [`salary`] - Salary normalization (hourly rate or gross aggregation)
//! - [`convert`] - Length/weight/temperature unit conversion
//! - [`bmi`] - Body-mass index with category band
//! - [`fuel`] - Trip fuel volume and cost
//! - [`percentage`] - Percentage of a total
//! - [`time`] - Hours/minutes/seconds conversion
//! - [`age`] - Calendar age from date of birth

pub mod age;
pub mod bmi;
pub mod convert;
pub mod emi;
pub mod fuel;
pub mod gst;
pub mod percentage;
pub mod pf;
pub mod salary;
pub mod time;

// Re-export commonly used types
pub use age::{AgeInput, AgeResult};
pub use bmi::{BmiInput, BmiResult};
pub use convert::{ConvertInput, ConvertResult};
pub use emi::{EmiInput, EmiResult};
pub use fuel::{FuelInput, FuelResult};
pub use gst::{GstInput, GstResult};
pub use percentage::{PercentageInput, PercentageResult};
pub use pf::{PfInput, PfResult};
pub use salary::{SalaryInput, SalaryResult};
pub use time::{TimeInput, TimeResult};

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::params::Params;

/// Enum of every operation the engine exposes, named after the original
/// API routes.
///
/// This is the single entry point for callers holding untyped string
/// parameters: resolve the operation by name, then [`evaluate`] it.
///
/// [`evaluate`]: Operation::evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Emi,
    Gst,
    Pf,
    Salary,
    Unit,
    Bmi,
    Fuel,
    Percentage,
    Time,
    Age,
}

impl Operation {
    /// All operations, in route order
    pub const ALL: [Operation; 10] = [
        Operation::Emi,
        Operation::Gst,
        Operation::Pf,
        Operation::Salary,
        Operation::Unit,
        Operation::Bmi,
        Operation::Fuel,
        Operation::Percentage,
        Operation::Time,
        Operation::Age,
    ];

    /// Resolve an operation from its route name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }

    /// The route name of this operation
    pub fn name(self) -> &'static str {
        match self {
            Operation::Emi => "emi",
            Operation::Gst => "gst",
            Operation::Pf => "pf",
            Operation::Salary => "salary",
            Operation::Unit => "unit",
            Operation::Bmi => "bmi",
            Operation::Fuel => "fuel",
            Operation::Percentage => "percentage",
            Operation::Time => "time",
            Operation::Age => "age",
        }
    }

    /// Coerce the raw parameters, run the formula, and wrap the outcome.
    ///
    /// Never panics: every coercion or validation failure becomes an error
    /// envelope.
    pub fn evaluate(self, params: &Params) -> Envelope {
        match self {
            Operation::Emi => {
                Envelope::from_result(EmiInput::from_params(params).and_then(|i| emi::calculate(&i)))
            }
            Operation::Gst => {
                Envelope::from_result(GstInput::from_params(params).and_then(|i| gst::calculate(&i)))
            }
            Operation::Pf => {
                Envelope::from_result(PfInput::from_params(params).and_then(|i| pf::calculate(&i)))
            }
            Operation::Salary => Envelope::from_result(
                SalaryInput::from_params(params).and_then(|i| salary::calculate(&i)),
            ),
            Operation::Unit => Envelope::from_result(
                ConvertInput::from_params(params).and_then(|i| convert::calculate(&i)),
            ),
            Operation::Bmi => {
                Envelope::from_result(BmiInput::from_params(params).and_then(|i| bmi::calculate(&i)))
            }
            Operation::Fuel => Envelope::from_result(
                FuelInput::from_params(params).and_then(|i| fuel::calculate(&i)),
            ),
            Operation::Percentage => Envelope::from_result(
                PercentageInput::from_params(params).and_then(|i| percentage::calculate(&i)),
            ),
            Operation::Time => Envelope::from_result(
                TimeInput::from_params(params).and_then(|i| time::calculate(&i)),
            ),
            Operation::Age => {
                Envelope::from_result(AgeInput::from_params(params).and_then(|i| age::calculate(&i)))
            }
        }
    }
}

/// Evaluate an operation by route name. An unknown name produces an error
/// envelope, not a panic.
pub fn evaluate(name: &str, params: &Params) -> Envelope {
    match Operation::from_name(name) {
        Some(op) => op.evaluate(params),
        None => Envelope::Error {
            message: format!("Unknown operation: {name}"),
        },
    }
}
