//! Typed CSS selector construction for the Wombat toolkit.
//!
//! # Scope
//!
//! This crate implements the forward direction of
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) composition:
//!
//! - **Compound chains** — fluent accumulation of element, ID, class,
//!   attribute, pseudo-class, and pseudo-element fragments, with the
//!   canonical category order and the singleton constraints enforced as
//!   typed errors
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, and subsequent-sibling tokens
//!   - Recursive combination of chains and prior combinations
//! - **Rendering** — `Display` output of the final selector string
//!
//! # Not Implemented
//!
//! - Parsing selector strings back into fragments
//! - Validation or escaping of fragment content
//! - Specificity calculation and element matching

/// Selector chains, categories, and combination per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use selector::{Category, Combinator, CombinedSelector, Selector, SelectorError, combine};
