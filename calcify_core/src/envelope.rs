//! # Response Envelope
//!
//! Every calculation outcome is wrapped in a uniform JSON envelope before
//! it leaves the engine:
//!
//! ```json
//! { "status": "success", "data": { "emi": 8791.59 } }
//! { "status": "error", "message": "Missing or non-numeric input: rate" }
//! ```
//!
//! The external collaborator serializes the envelope as-is, with no further
//! transformation, and maps the `error` status to a client-error HTTP code.

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// Tagged success/failure wrapper around a calculation result.
///
/// Exactly one variant is ever populated; the `status` field is the
/// discriminant on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope {
    Success { data: serde_json::Value },
    Error { message: String },
}

impl Envelope {
    /// Wrap a successful result.
    pub fn success<T: Serialize>(data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Envelope::Success { data: value },
            // serde_json renders a non-finite float as null rather than
            // erroring, so formula modules screen finiteness before a
            // result is constructed; this arm only fires for shapes Value
            // cannot represent, which the result structs do not contain.
            Err(e) => Envelope::Error {
                message: format!("Serialization failed: {e}"),
            },
        }
    }

    /// Wrap a failure.
    pub fn failure(error: &CalcError) -> Self {
        Envelope::Error {
            message: error.to_string(),
        }
    }

    /// Wrap either outcome of a calculation.
    pub fn from_result<T: Serialize>(result: CalcResult<T>) -> Self {
        match result {
            Ok(data) => Envelope::success(&data),
            Err(error) => Envelope::failure(&error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }
}
