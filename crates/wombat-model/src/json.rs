//! JSON serialization helpers.
//!
//! Thin wrappers over serde_json that funnel both directions through one
//! crate-local error type, so callers never name serde_json directly.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error raised by the JSON helpers.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input was not valid JSON, or did not match the target type's
    /// shape. Also covers the (rare) serialization failures.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialize a value to JSON text.
///
/// Key order is implementation-defined (serde field order for derived
/// types).
///
/// # Errors
///
/// [`JsonError::Parse`] if the value cannot be represented as JSON
/// (e.g. a map with non-string keys).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    Ok(serde_json::to_string(value)?)
}

/// Parse JSON text into a value of type `T`.
///
/// The target type supplies the behavior of the result: parsing into a
/// concrete type restores its full method surface, which is what makes
/// these helpers round-trip a typed value and not just its fields.
///
/// # Errors
///
/// [`JsonError::Parse`] if `text` is not valid JSON or does not match
/// `T`'s shape.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    Ok(serde_json::from_str(text)?)
}
