//! Plain value types and JSON helpers for the Wombat toolkit.
//!
//! This crate provides:
//! - [`Rect`] - a plain width/height value with a computed area
//! - [`to_json`] / [`from_json`] - thin serde_json wrappers with a single
//!   typed error
//!
//! Deserializing into a concrete type is how a parsed value regains
//! behavior here: `from_json::<Rect>` yields a value carrying all of
//! [`Rect`]'s methods, not a bag of fields.

/// JSON serialization helpers on top of serde_json.
pub mod json;
/// Plain geometry value types.
pub mod rect;

pub use json::{JsonError, from_json, to_json};
pub use rect::Rect;
