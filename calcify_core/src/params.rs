//! # Input Coercion
//!
//! The engine is called with untyped string parameters extracted from a
//! query string. This module is the single typed parsing layer that every
//! formula module consumes instead of reimplementing string-to-number
//! coercion per module.
//!
//! Coercion is total: absence, an empty string, and non-numeric text all
//! produce a distinguished non-value, never a panic. A legitimate value of
//! zero is [`Coerced::Value(0.0)`] and remains distinguishable from a
//! missing parameter, so modules must check the variant explicitly rather
//! than treating zero as absent.
//!
//! ## Example
//!
//! ```rust
//! use calcify_core::params::{Coerced, Params};
//!
//! let params = Params::new().with("amount", "1000").with("rate", "");
//!
//! assert_eq!(params.coerce("amount"), Coerced::Value(1000.0));
//! assert_eq!(params.coerce("rate"), Coerced::Missing);
//! assert!(params.require("rate").is_err());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Outcome of coercing one raw parameter to a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Coerced {
    /// Parameter absent or empty
    Missing,
    /// Parameter present but not parseable as a finite number
    Invalid,
    /// Parameter parsed to a finite number (zero included)
    Value(f64),
}

impl Coerced {
    /// The parsed number, if any
    pub fn value(self) -> Option<f64> {
        match self {
            Coerced::Value(v) => Some(v),
            _ => None,
        }
    }

    /// True when a finite number was parsed
    pub fn is_value(self) -> bool {
        matches!(self, Coerced::Value(_))
    }
}

/// Raw request parameters: a map from parameter name to raw string.
///
/// Constructed by the external collaborator (HTTP router, CLI), consumed
/// once per call by the formula modules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Params(BTreeMap::new())
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// The raw string value, trimmed; `None` when absent or empty
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Coerce a parameter to a number.
    ///
    /// `NaN`/`inf` literals parse in Rust but are never legitimate request
    /// values, so they coerce to [`Coerced::Invalid`] as well.
    pub fn coerce(&self, name: &str) -> Coerced {
        match self.raw(name) {
            None => Coerced::Missing,
            Some(raw) => match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => Coerced::Value(v),
                _ => Coerced::Invalid,
            },
        }
    }

    /// A required numeric parameter. Absent or non-numeric fails with
    /// `MissingInput`.
    pub fn require(&self, name: &str) -> CalcResult<f64> {
        self.coerce(name)
            .value()
            .ok_or_else(|| CalcError::missing_input(name))
    }

    /// An optional numeric parameter. Absent is `None`; present but
    /// non-numeric still fails with `MissingInput`.
    pub fn optional(&self, name: &str) -> CalcResult<Option<f64>> {
        match self.coerce(name) {
            Coerced::Missing => Ok(None),
            Coerced::Invalid => Err(CalcError::missing_input(name)),
            Coerced::Value(v) => Ok(Some(v)),
        }
    }

    /// A required integer parameter, truncated toward zero.
    pub fn require_int(&self, name: &str) -> CalcResult<i64> {
        Ok(self.require(name)?.trunc() as i64)
    }

    /// A boolean-ish flag: `true`/`1`/`yes` (case-insensitive) is true,
    /// anything else (including absence) is false.
    pub fn flag(&self, name: &str) -> bool {
        matches!(
            self.raw(name).map(str::to_ascii_lowercase).as_deref(),
            Some("true") | Some("1") | Some("yes")
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
