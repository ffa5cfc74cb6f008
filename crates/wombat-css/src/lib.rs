//! Rule-checked construction of CSS selector strings for the Wombat toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector builder** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, ID, class, attribute, pseudo-class, and pseudo-element fragments
//!   - Part-category ordering and uniqueness enforcement at every step
//!   - Combinator joins between finished selectors
//!
//! # Not Implemented
//!
//! - Selector parsing (this crate only produces selector text)
//! - Matching against a document tree
//! - Specificity calculation
//! - Escaping of identifier characters

/// Fluent, order-checked assembly of selector strings per
/// [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

pub use selector::{Combinator, SelectorBuilder, SelectorError, SelectorPart};
