//! Selector combination
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use std::fmt;

use serde::Serialize;
use strum_macros::Display;

use super::Selector;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The four CSS combinators, displaying as their source tokens. [`combine`]
/// accepts these through its `Display` bound, alongside arbitrary opaque
/// token strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors."
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    #[strum(serialize = "~")]
    SubsequentSibling,
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// A combination of selectors: an ordered sequence of rendered compound
/// selectors and the combinator tokens between them.
///
/// Each value owns its piece sequence, so independent combinations cannot
/// interfere; [`combine`] merges operand sequences, which is how repeated
/// and nested combinations accumulate into one chain:
///
/// ```
/// use wombat_css::selector::{self, Combinator, combine};
///
/// let inner = combine(selector::element("ul"), Combinator::Descendant, selector::element("li"));
/// let outer = combine(selector::element("div"), Combinator::Child, inner);
/// assert_eq!(outer.to_string(), "div > ul li");
/// ```
///
/// Rendering joins the pieces with single spaces and is idempotent.
#[derive(Debug, Clone, Default)]
pub struct CombinedSelector {
    pieces: Vec<String>,
}

impl CombinedSelector {
    /// Whether the combination holds no pieces. An empty combination
    /// contributes nothing when used as an operand of [`combine`] and
    /// renders as the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl From<Selector> for CombinedSelector {
    /// A chain contributes its rendered compound selector as a single
    /// piece; an empty chain contributes nothing.
    fn from(selector: Selector) -> Self {
        if selector.is_empty() {
            return Self::default();
        }
        Self {
            pieces: vec![selector.to_string()],
        }
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pieces.join(" "))
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Combine two selectors with a combinator token. Either operand may be a
/// [`Selector`] chain or a previously built [`CombinedSelector`]; the
/// result is a new combination whose pieces are the left operand's pieces,
/// the token, then the right operand's pieces.
///
/// The token is opaque: any `Display` value is accepted and its trimmed
/// rendering inserted verbatim. A blank token is the descendant combinator
/// (whitespace per § 16.1) and contributes no piece; the operands are then
/// joined by the rendering separator alone.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn combine(
    left: impl Into<CombinedSelector>,
    combinator: impl fmt::Display,
    right: impl Into<CombinedSelector>,
) -> CombinedSelector {
    let mut pieces = left.into().pieces;
    let token = combinator.to_string();
    let token = token.trim();
    if !token.is_empty() {
        pieces.push(token.to_string());
    }
    pieces.extend(right.into().pieces);
    CombinedSelector { pieces }
}
