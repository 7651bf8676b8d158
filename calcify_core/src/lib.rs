//! # calcify_core - Stateless Calculation Engine
//!
//! `calcify_core` is the computational heart of Calcify, a small set of
//! financial and unit-conversion formulas computed from untyped string
//! parameters and wrapped in a uniform JSON envelope. The HTTP routing
//! that fronts it is interchangeable glue; everything with actual domain
//! logic lives here.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results;
//!   nothing outlives a single call
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Fail Closed**: Raw parameters pass through one typed coercion
//!   layer; a missing or malformed input is always a structured failure,
//!   never a panic or a NaN in a success payload
//!
//! ## Quick Start
//!
//! ```rust
//! use calcify_core::{calculations, Params};
//!
//! let params = Params::new()
//!     .with("principal", "100000")
//!     .with("rate", "10")
//!     .with("months", "12");
//!
//! let envelope = calculations::evaluate("emi", &params);
//! let json = serde_json::to_string(&envelope).unwrap();
//! assert!(json.starts_with(r#"{"status":"success""#));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All formula modules and operation dispatch
//! - [`params`] - Typed coercion of raw string parameters
//! - [`envelope`] - The success/error response envelope
//! - [`units`] - Immutable unit factor tables and scales
//! - [`rounding`] - Fixed-precision rounding helpers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod envelope;
pub mod errors;
pub mod params;
pub mod rounding;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::Operation;
pub use envelope::Envelope;
pub use errors::{CalcError, CalcResult};
pub use params::{Coerced, Params};
