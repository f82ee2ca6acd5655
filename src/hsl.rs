//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

/// A color specified with the HSL notation in the sRGB color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue component of the color, in degrees [0, 360).
    pub hue: Component,
    /// The saturation component of the color, as a percentage [0, 100].
    pub saturation: Component,
    /// The lightness component of the color, as a percentage [0, 100].
    pub lightness: Component,
}

impl Hsl {
    /// Create a new color with the HSL notation.
    pub fn new(hue: Component, saturation: Component, lightness: Component) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}
