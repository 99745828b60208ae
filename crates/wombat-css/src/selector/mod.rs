//! CSS selector construction
//!
//! This module builds selector strings from typed fragments per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/). It is the
//! forward direction only: fragments in, rendered selector out. Fragment
//! *content* is taken verbatim; what is enforced is the composition of
//! fragment categories inside one compound selector.

use std::fmt;

use serde::Serialize;
use strum::{EnumCount as _, IntoEnumIterator as _};
use strum_macros::{Display, EnumCount, EnumIter};
use thiserror::Error;

mod combine;

pub use combine::{Combinator, CombinedSelector, combine};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The categories of simple selector that may appear inside one compound
/// selector, in the canonical order CSS requires them to be written:
/// `element`, `id`, `class`, `attribute`, `pseudo-class`, `pseudo-element`.
///
/// The derived `Ord` follows declaration order and therefore *is* the
/// canonical order; [`Selector`] relies on this for its ordering check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumCount, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `a`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.editable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:first-child`
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl Category {
    /// Whether this category may appear more than once in one compound
    /// selector. Classes, attributes, and pseudo-classes repeat; type,
    /// ID, and pseudo-element fragments are singletons.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }

    /// Wrap a raw value in this category's delimiter, producing the
    /// fragment as it appears in the rendered selector.
    ///
    /// The value itself is not validated or escaped.
    #[must_use]
    pub fn decorate(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }
}

/// Errors raised while composing a single selector chain.
///
/// Both are fatal to the chain being built: the builder is consumed by the
/// failing call and there is no recovery path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A category was appended after a category that must follow it.
    ///
    /// The ordering check runs before the duplicate check on every append,
    /// so an out-of-order singleton repeat reports this error, not
    /// [`SelectorError::Duplicate`].
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The category whose append violated the canonical order.
        category: Category,
    },

    /// A singleton category (`element`, `id`, or `pseudo-element`) was
    /// appended a second time to the same chain.
    #[error("'{category}' may occur at most once inside a selector")]
    Duplicate {
        /// The singleton category that was appended again.
        category: Category,
    },
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// A single compound-selector chain under construction.
///
/// One fragment slot is kept per [`Category`]; repeatable categories
/// accumulate into their slot in call order, each occurrence re-wrapped
/// with its own delimiter. Chains start from the facade functions
/// ([`element`], [`id`], [`class`], [`attr`], [`pseudo_class`],
/// [`pseudo_element`]) and grow by the fluent methods below, each of which
/// consumes the builder and returns it (or the error that ends the chain):
///
/// ```
/// use wombat_css::selector;
///
/// let link = selector::element("a")
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?;
/// assert_eq!(link.to_string(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), wombat_css::SelectorError>(())
/// ```
///
/// Rendering via [`fmt::Display`] concatenates the stored fragments in
/// canonical category order and never mutates the chain.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    /// Accumulated fragment per category, indexed by canonical order.
    parts: [Option<String>; Category::COUNT],
    /// The most recently appended category; appends may not move backwards
    /// past it. Repeating the equal category leaves it unchanged.
    last: Option<Category>,
}

impl Selector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append the element (type) fragment: stored as the raw value.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any later category has already been
    /// appended; [`SelectorError::Duplicate`] if the chain already has an
    /// element fragment.
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Element, value)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append the ID fragment: `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any later category has already been
    /// appended; [`SelectorError::Duplicate`] if the chain already has an
    /// ID fragment.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Id, value)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append a class fragment: `.value`. Repeatable; each call appends in
    /// call order.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any later category has already been
    /// appended.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Class, value)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append an attribute fragment: `[value]`. Repeatable; each call
    /// appends in call order.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any later category has already been
    /// appended.
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Attribute, value)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append a pseudo-class fragment: `:value`. Repeatable; each call
    /// appends in call order.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-element has already been
    /// appended.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoClass, value)
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Append the pseudo-element fragment: `::value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if the chain already has a
    /// pseudo-element fragment. The ordering check cannot fail here since
    /// no category follows pseudo-elements.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoElement, value)
    }

    /// Whether no fragment has been stored yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Append a fragment of `category`, enforcing the canonical order and
    /// the singleton constraint, in that order.
    fn append(mut self, category: Category, value: &str) -> Result<Self, SelectorError> {
        // Canonical order: element -> id -> class -> attribute ->
        // pseudo-class -> pseudo-element. Equal categories may repeat;
        // moving backwards may not.
        if self.last.is_some_and(|last| category < last) {
            return Err(SelectorError::OutOfOrder { category });
        }
        if !category.is_repeatable() && self.parts[category as usize].is_some() {
            return Err(SelectorError::Duplicate { category });
        }
        self.push_fragment(category, value);
        Ok(self)
    }

    /// Store a fragment without checks and advance the ordering cursor.
    /// Callers have already validated the append (or the chain is fresh).
    fn push_fragment(&mut self, category: Category, value: &str) {
        self.parts[category as usize]
            .get_or_insert_default()
            .push_str(&category.decorate(value));
        self.last = Some(self.last.map_or(category, |last| last.max(category)));
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in Category::iter() {
            if let Some(fragment) = &self.parts[category as usize] {
                f.write_str(fragment)?;
            }
        }
        Ok(())
    }
}

/// Start a chain with an element (type) fragment.
#[must_use]
pub fn element(value: &str) -> Selector {
    seed(Category::Element, value)
}

/// Start a chain with an ID fragment.
#[must_use]
pub fn id(value: &str) -> Selector {
    seed(Category::Id, value)
}

/// Start a chain with a class fragment.
#[must_use]
pub fn class(value: &str) -> Selector {
    seed(Category::Class, value)
}

/// Start a chain with an attribute fragment.
#[must_use]
pub fn attr(value: &str) -> Selector {
    seed(Category::Attribute, value)
}

/// Start a chain with a pseudo-class fragment.
#[must_use]
pub fn pseudo_class(value: &str) -> Selector {
    seed(Category::PseudoClass, value)
}

/// Start a chain with a pseudo-element fragment.
#[must_use]
pub fn pseudo_element(value: &str) -> Selector {
    seed(Category::PseudoElement, value)
}

/// The first append to a fresh chain can violate neither the ordering nor
/// the singleton constraint, so the facade entry points are infallible.
fn seed(category: Category, value: &str) -> Selector {
    let mut selector = Selector::default();
    selector.push_fragment(category, value);
    selector
}
