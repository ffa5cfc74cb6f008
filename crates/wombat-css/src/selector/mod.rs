//! Fluent CSS selector construction
//!
//! This module builds selector strings per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/), enforcing the
//! grammar's part ordering as the selector is assembled rather than by
//! parsing afterwards.
//!
//! A [`SelectorBuilder`] is an immutable value: every part-adding operation
//! returns a new builder and leaves the receiver untouched, so any builder
//! (including the empty one) can be branched from freely. Rendering is a
//! pure read of the accumulated text.

use std::fmt;

use strum_macros::Display;
use thiserror::Error;

/// [§ 4.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// The six kinds of simple-selector fragment a compound selector may carry,
/// in the canonical order they appear within a compound.
///
/// Declaration order is the canonical order: a fragment may never be added
/// after a fragment of a later category.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[strum(serialize_all = "kebab-case")]
pub enum SelectorPart {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Examples: `div`, `p`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value."
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.highlight`, `.nav-item`
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// The bracketed attribute expression, carried verbatim.
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// "A pseudo-class is a simple selector that permits selection based on
    /// information that lies outside of the document tree."
    ///
    /// Examples: `:hover`, `:nth-of-type(even)`
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "A pseudo-element represents an element not directly present in the
    /// document tree." At most one per compound selector.
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl SelectorPart {
    /// Position of this category in the canonical compound-selector order.
    #[must_use]
    const fn rank(self) -> u8 {
        match self {
            Self::Element => 0,
            Self::Id => 1,
            Self::Class => 2,
            Self::Attribute => 3,
            Self::PseudoClass => 4,
            Self::PseudoElement => 5,
        }
    }

    /// Whether this category may appear at most once in a compound selector.
    ///
    /// [§ 5.1](https://www.w3.org/TR/selectors-4/#type-selectors) and
    /// [§ 11.1](https://www.w3.org/TR/selectors-4/#pseudo-element-syntax):
    /// an element name, an ID, and a pseudo-element each identify one thing;
    /// classes, attribute conditions, and pseudo-classes stack freely.
    #[must_use]
    const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// Whitespace. Note that joining with this combinator still inserts the
    /// token between the surrounding single spaces, so the rendered text
    /// contains three consecutive spaces.
    #[strum(to_string = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// A greater-than sign (`>`).
    #[strum(to_string = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// A plus sign (`+`).
    #[strum(to_string = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// A tilde (`~`).
    #[strum(to_string = "~")]
    SubsequentSibling,
}

/// Error raised when a part-adding operation would violate the
/// compound-selector grammar.
///
/// Both variants are raised at the offending call; no partially updated
/// builder is ever produced, so the caller's existing builders stay valid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// The fragment's category must precede a category already present.
    ///
    /// The permitted order is element, id, class, attribute, pseudo-class,
    /// pseudo-element.
    #[error(
        "`{part}` cannot follow `{previous}`: parts must appear in the order \
         element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The category of the rejected fragment.
        part: SelectorPart,
        /// The furthest category already present in the selector.
        previous: SelectorPart,
    },

    /// The fragment's category is limited to one occurrence per selector
    /// (element, id, pseudo-element) and is already present.
    #[error("`{part}` may appear at most once in a selector")]
    Duplicate {
        /// The category of the rejected fragment.
        part: SelectorPart,
    },
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// An immutable, incrementally built selector string.
///
/// The builder tracks only the furthest part category applied so far.
/// Because every accepted fragment's category is at or beyond the previous
/// one, that single field encodes the full set of legal next categories:
/// earlier categories are out of order, the same category is legal exactly
/// when it is repeatable.
///
/// # Example
///
/// ```
/// use wombat_css::SelectorBuilder;
///
/// let selector = SelectorBuilder::new()
///     .element("a")?
///     .class("nav")?
///     .attr("href$=\".png\"")?
///     .pseudo_class("hover")?
///     .render();
/// assert_eq!(selector, "a.nav[href$=\".png\"]:hover");
/// # Ok::<(), wombat_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Accumulated selector text.
    text: String,
    /// Furthest part category applied so far; `None` for an empty builder.
    last_part: Option<SelectorPart>,
}

impl SelectorBuilder {
    /// Create an empty builder, the starting point of every chain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            last_part: None,
        }
    }

    /// Whether no fragment has been applied yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last_part.is_none()
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append a type selector, e.g. `div`. The element name must come
    /// before every other part.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an element name is already present;
    /// [`SelectorError::OutOfOrder`] if any other part category is.
    pub fn element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPart::Element, value)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append an ID selector, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an ID is already present;
    /// [`SelectorError::OutOfOrder`] after class, attribute, pseudo-class,
    /// or pseudo-element parts.
    pub fn id(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPart::Id, &format!("#{value}"))
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append a class selector, rendered as `.value`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] after attribute, pseudo-class, or
    /// pseudo-element parts.
    pub fn class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPart::Class, &format!(".{value}"))
    }

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append an attribute selector, rendered as `[value]`. The value is
    /// the raw attribute expression (e.g. `href$=".png"`) and is not
    /// inspected further. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] after pseudo-class or pseudo-element
    /// parts.
    pub fn attr(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPart::Attribute, &format!("[{value}]"))
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append a pseudo-class, rendered as `:value`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] after a pseudo-element.
    pub fn pseudo_class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPart::PseudoClass, &format!(":{value}"))
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Append a pseudo-element, rendered as `::value`. At most one per
    /// selector, and always last.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a pseudo-element is already present.
    pub fn pseudo_element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPart::PseudoElement, &format!("::{value}"))
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Join two selectors with a combinator, producing
    /// `self text ++ " " ++ token ++ " " ++ other text`.
    ///
    /// The result carries no part state and is intended to be rendered, or
    /// combined again, rather than extended with further simple parts. With
    /// [`Combinator::Descendant`] the token itself is a space, so the join
    /// keeps the resulting three consecutive spaces verbatim.
    #[must_use]
    pub fn combine(&self, combinator: Combinator, other: &Self) -> Self {
        Self {
            text: format!("{} {combinator} {}", self.text, other.text),
            last_part: None,
        }
    }

    /// Return the accumulated selector text.
    ///
    /// Rendering is a pure read: it may be called any number of times, and
    /// the builder remains a valid base for further parts.
    #[must_use]
    pub fn render(&self) -> String {
        self.text.clone()
    }

    /// Run the category transition table and append the rendered fragment.
    ///
    /// Transition rule, for current state `s` and incoming category `p`:
    /// - empty builder: accept;
    /// - `p` ranked before `s`: out of order;
    /// - `p` equal to `s` and limited to one occurrence: duplicate;
    /// - otherwise: accept, with `p` as the new furthest category.
    fn append(&self, part: SelectorPart, fragment: &str) -> Result<Self, SelectorError> {
        if let Some(previous) = self.last_part {
            if part.rank() < previous.rank() {
                return Err(SelectorError::OutOfOrder { part, previous });
            }
            if part == previous && part.is_unique() {
                return Err(SelectorError::Duplicate { part });
            }
        }

        let mut text = self.text.clone();
        text.push_str(fragment);
        Ok(Self {
            text,
            last_part: Some(part),
        })
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_accepts_forward_order() {
        let builder = SelectorBuilder::new().id("main").unwrap();
        assert!(builder.class("wide").is_ok());
    }

    #[test]
    fn transition_rejects_backward_order() {
        let builder = SelectorBuilder::new().class("wide").unwrap();
        assert_eq!(
            builder.element("div"),
            Err(SelectorError::OutOfOrder {
                part: SelectorPart::Element,
                previous: SelectorPart::Class,
            })
        );
    }

    #[test]
    fn unique_parts_reject_repeats() {
        let builder = SelectorBuilder::new().pseudo_element("before").unwrap();
        assert_eq!(
            builder.pseudo_element("after"),
            Err(SelectorError::Duplicate {
                part: SelectorPart::PseudoElement,
            })
        );
    }

    #[test]
    fn part_names_render_kebab_case() {
        assert_eq!(SelectorPart::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(SelectorPart::PseudoElement.to_string(), "pseudo-element");
        assert_eq!(SelectorPart::Element.to_string(), "element");
    }

    #[test]
    fn combinator_tokens() {
        assert_eq!(Combinator::Descendant.to_string(), " ");
        assert_eq!(Combinator::Child.to_string(), ">");
        assert_eq!(Combinator::NextSibling.to_string(), "+");
        assert_eq!(Combinator::SubsequentSibling.to_string(), "~");
    }
}
