//! Integration tests for selector combination.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use wombat_css::selector::{self, Combinator, CombinedSelector, Selector, combine};

#[test]
fn test_child_combination() {
    // [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    let sel = combine(
        selector::element("div"),
        Combinator::Child,
        selector::element("p"),
    );
    assert_eq!(sel.to_string(), "div > p");
}

#[test]
fn test_next_sibling_combination() {
    // [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    let sel = combine(
        selector::element("h1"),
        Combinator::NextSibling,
        selector::element("p"),
    );
    assert_eq!(sel.to_string(), "h1 + p");
}

#[test]
fn test_subsequent_sibling_combination() {
    // [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    let sel = combine(
        selector::element("h1"),
        Combinator::SubsequentSibling,
        selector::element("p"),
    );
    assert_eq!(sel.to_string(), "h1 ~ p");
}

#[test]
fn test_descendant_combination_joins_with_a_single_space() {
    // [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    // "A descendant combinator is whitespace that separates two compound
    // selectors." The token contributes no piece of its own.
    let sel = combine(
        selector::element("ul"),
        Combinator::Descendant,
        selector::element("li"),
    );
    assert_eq!(sel.to_string(), "ul li");
}

#[test]
fn test_empty_token_is_the_descendant_combinator() {
    let sel = combine(selector::element("ul"), "", selector::element("li"));
    assert_eq!(sel.to_string(), "ul li");
}

#[test]
fn test_raw_token_is_inserted_verbatim() {
    // Tokens are opaque; anything non-blank lands between the operands.
    let sel = combine(selector::element("a"), ">>", selector::element("b"));
    assert_eq!(sel.to_string(), "a >> b");
}

#[test]
fn test_right_nested_combination() {
    let inner = combine(
        selector::element("ul"),
        Combinator::Descendant,
        selector::element("li"),
    );
    let outer = combine(selector::element("div"), Combinator::Child, inner);
    assert_eq!(outer.to_string(), "div > ul li");
}

#[test]
fn test_left_nested_combination() {
    let inner = combine(
        selector::element("a"),
        Combinator::Child,
        selector::element("b"),
    );
    let outer = combine(inner, Combinator::SubsequentSibling, selector::element("c"));
    assert_eq!(outer.to_string(), "a > b ~ c");
}

#[test]
fn test_nested_combination_with_chains() {
    let first = combine(
        selector::element("div"),
        Combinator::Descendant,
        selector::element("li").pseudo_class("first-child").unwrap(),
    );
    let second = combine(
        selector::element("div"),
        Combinator::Child,
        selector::element("p").pseudo_class("focus").unwrap(),
    );
    let sel = combine(first, Combinator::SubsequentSibling, second);
    assert_eq!(sel.to_string(), "div li:first-child ~ div > p:focus");
}

#[test]
fn test_empty_operands_contribute_nothing() {
    let sel = combine(
        Selector::default(),
        Combinator::Child,
        selector::element("p"),
    );
    assert_eq!(sel.to_string(), "> p");

    let sel = combine(
        CombinedSelector::default(),
        Combinator::Child,
        selector::element("p"),
    );
    assert_eq!(sel.to_string(), "> p");
}

#[test]
fn test_empty_combination_renders_empty() {
    let empty = CombinedSelector::default();
    assert!(empty.is_empty());
    assert_eq!(empty.to_string(), "");
}

#[test]
fn test_combination_display_is_idempotent() {
    let sel = combine(
        selector::element("div"),
        Combinator::Child,
        selector::element("p"),
    );
    assert_eq!(sel.to_string(), "div > p");
    assert_eq!(sel.to_string(), "div > p");
}

#[test]
fn test_combinator_serializes_in_kebab_case() {
    let encoded = serde_json::to_string(&Combinator::NextSibling).unwrap();
    assert_eq!(encoded, r#""next-sibling""#);
}
