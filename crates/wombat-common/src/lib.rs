//! Shared utilities for the Wombat toolkit.
//!
//! This crate provides infrastructure used across the workspace:
//! - **Geometry** - plain rectangle value type
//! - **JSON helpers** - generic serde encode/decode wrappers

pub mod geometry;
pub mod json;

pub use geometry::Rect;
pub use json::{JsonError, from_json, to_json};
