//! Model a color in the CIE-Lab color space.

use crate::color::Component;

/// A color specified in the rectangular orthogonal form of the CIE-Lab
/// color space.
///
/// The lightness component covers roughly [0, 100]; the two chroma axes
/// are unbounded, typically falling within [-128, 127].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    /// The perceptual lightness component.
    pub lightness: Component,
    /// The a (green to red) chroma axis.
    pub a: Component,
    /// The b (blue to yellow) chroma axis.
    pub b: Component,
}

impl Lab {
    /// Create a new CIE-Lab color.
    pub fn new(lightness: Component, a: Component, b: Component) -> Self {
        Self { lightness, a, b }
    }
}
