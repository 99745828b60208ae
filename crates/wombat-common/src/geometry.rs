//! Geometry primitives.

use serde::{Deserialize, Serialize};

/// A rectangle described by its width and height.
///
/// A plain value holder: dimensions are stored as given, with no
/// validation of negative or non-finite inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its dimensions.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The area covered by the rectangle: `width * height`.
    #[must_use]
    pub const fn area(self) -> f32 {
        self.width * self.height
    }
}
