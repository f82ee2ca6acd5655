//! Conversions between the supported color representations.
//!
//! Each representation is modeled with its own type and conversions are
//! implemented on the relevant models, keeping every conversion path
//! explicit. The LAB legs go through CIE-XYZ.
//!
//! No conversion in this module clamps or rounds; out-of-gamut channels
//! travel unchanged until a color reaches the hex boundary.
//!
//! ```rust
//! use banded::hex;
//!
//! let lab = hex::parse("#d26a1e").unwrap().to_lab();
//! assert!(lab.lightness > 0.0);
//! ```

use crate::{
    color::Components,
    hsl::Hsl,
    lab::Lab,
    math::{transform, transform_3x3, Transform},
    rgb::Rgb,
    xyz::{Xyz, D65},
};

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const RGB_TO_XYZ: Transform = transform_3x3(
    0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
    0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
    0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_RGB: Transform = transform_3x3(
     3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
    -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
    -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
);

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) =
            util::rgb_to_hsl(&Components(self.red, self.green, self.blue));
        Hsl::new(hue, saturation, lightness)
    }

    /// Convert this color to the CIE-XYZ color space.
    pub fn to_xyz(&self) -> Xyz {
        let gamma_encoded = Components(self.red, self.green, self.blue).map(|v| v / 255.0);
        let linear = util::to_linear_light(&gamma_encoded);
        let Components(x, y, z) = transform(&RGB_TO_XYZ, &linear);
        Xyz::new(x, y, z)
    }

    /// Convert this color to the CIE-Lab color space, by way of CIE-XYZ.
    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        let Components(red, green, blue) =
            util::hsl_to_rgb(&Components(self.hue, self.saturation, self.lightness));
        Rgb::new(red, green, blue)
    }
}

impl Xyz {
    /// Convert this color to the CIE-Lab color space, normalizing by the
    /// D65 white point.
    pub fn to_lab(&self) -> Lab {
        let adapted = Components(
            self.x / D65::WHITE_POINT.0,
            self.y / D65::WHITE_POINT.1,
            self.z / D65::WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = adapted.map(util::lab_forward);

        Lab::new(116.0 * f1 - 16.0, 500.0 * (f0 - f1), 200.0 * (f1 - f2))
    }

    /// Convert this color to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        let linear = transform(&XYZ_TO_RGB, &Components(self.x, self.y, self.z));
        let Components(red, green, blue) = util::to_gamma_encoded(&linear).map(|v| v * 255.0);
        Rgb::new(red, green, blue)
    }
}

impl Lab {
    /// Convert this color to the CIE-XYZ color space, denormalizing by
    /// the D65 white point.
    pub fn to_xyz(&self) -> Xyz {
        let f1 = (self.lightness + 16.0) / 116.0;
        let f0 = f1 + self.a / 500.0;
        let f2 = f1 - self.b / 200.0;

        let unscaled = Components(f0, f1, f2).map(util::lab_inverse);

        Xyz::new(
            unscaled.0 * D65::WHITE_POINT.0,
            unscaled.1 * D65::WHITE_POINT.1,
            unscaled.2 * D65::WHITE_POINT.2,
        )
    }

    /// Convert this color to the sRGB color space, by way of CIE-XYZ.
    pub fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }
}

mod util {
    use crate::color::{Component, Components};
    use crate::math::normalize_hue;

    /// Threshold between the cube-root and linear segments of the Lab
    /// nonlinearity.
    const EPSILON: Component = 0.008856;
    const LINEAR_SLOPE: Component = 7.787;
    const OFFSET: Component = 16.0 / 116.0;

    /// The forward Lab nonlinearity: cube root above the threshold, the
    /// linear segment below it.
    pub fn lab_forward(t: Component) -> Component {
        if t > EPSILON {
            t.cbrt()
        } else {
            LINEAR_SLOPE * t + OFFSET
        }
    }

    /// Inverse of [`lab_forward`].
    pub fn lab_inverse(f: Component) -> Component {
        let cubed = f * f * f;
        if cubed > EPSILON {
            cubed
        } else {
            (f - OFFSET) / LINEAR_SLOPE
        }
    }

    /// sRGB gamma decoding, mapping gamma-encoded channels on [0, 1] to
    /// linear light.
    pub fn to_linear_light(from: &Components) -> Components {
        from.map(|value| {
            let abs = value.abs();

            if abs < 0.04045 {
                value / 12.92
            } else {
                value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
            }
        })
    }

    /// sRGB gamma encoding, mapping linear light back to gamma-encoded
    /// channels on [0, 1].
    pub fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|value| {
            let abs = value.abs();

            if abs > 0.0031308 {
                value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
            } else {
                12.92 * value
            }
        })
    }

    /// Convert RGB channels on the [0, 255] scale to the HSL notation,
    /// hue in degrees and saturation/lightness as percentages.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = from.map(|v| v / 255.0);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let lightness = (max + min) / 2.0;
        let delta = max - min;

        // Achromatic: hue and saturation carry no information.
        if delta == 0.0 {
            return Components(0.0, 0.0, lightness * 100.0);
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = 60.0
            * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        Components(hue, saturation * 100.0, lightness * 100.0)
    }

    /// Convert from the HSL notation back to RGB channels on the
    /// [0, 255] scale.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0) / 360.0;
        let saturation = from.1 / 100.0;
        let lightness = from.2 / 100.0;

        if saturation == 0.0 {
            let gray = lightness * 255.0;
            return Components(gray, gray, gray);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Components(
            hue2rgb(p, q, hue + 1.0 / 3.0),
            hue2rgb(p, q, hue),
            hue2rgb(p, q, hue - 1.0 / 3.0),
        )
        .map(|v| v * 255.0)
    }

    fn hue2rgb(p: Component, q: Component, t: Component) -> Component {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_component_eq;
    use crate::color::Component;
    use crate::hex;
    use crate::hsl::Hsl;
    use crate::lab::Lab;
    use crate::rgb::Rgb;

    #[test]
    fn rgb_to_hsl_known_values() {
        let hsl = Rgb::new(255.0, 0.0, 0.0).to_hsl();
        assert_component_eq!(hsl.hue, 0.0);
        assert_component_eq!(hsl.saturation, 100.0);
        assert_component_eq!(hsl.lightness, 50.0);

        // rgb(255, 128, 0)
        let hsl = Rgb::new(255.0, 128.0, 0.0).to_hsl();
        assert_component_eq!(hsl.hue, 30.117647058823529, 1.0e-9);
        assert_component_eq!(hsl.saturation, 100.0);
        assert_component_eq!(hsl.lightness, 50.0);

        // rgb(0, 0, 255)
        let hsl = Rgb::new(0.0, 0.0, 255.0).to_hsl();
        assert_component_eq!(hsl.hue, 240.0);
        assert_component_eq!(hsl.saturation, 100.0);
        assert_component_eq!(hsl.lightness, 50.0);
    }

    #[test]
    fn achromatic_rgb_has_zero_hue_and_saturation() {
        let hsl = Rgb::new(128.0, 128.0, 128.0).to_hsl();
        assert_eq!(hsl.hue, 0.0);
        assert_eq!(hsl.saturation, 0.0);
        assert_component_eq!(hsl.lightness, 100.0 * 128.0 / 255.0, 1.0e-9);
    }

    #[test]
    fn hsl_to_rgb_known_values() {
        // hsl(120, 100%, 25%) is #008000.
        let rgb = Hsl::new(120.0, 100.0, 25.0).to_rgb();
        assert_component_eq!(rgb.red, 0.0, 1.0e-9);
        assert_component_eq!(rgb.green, 127.5, 1.0e-9);
        assert_component_eq!(rgb.blue, 0.0, 1.0e-9);

        // A zero-saturation color is a pure gray.
        let rgb = Hsl::new(300.0, 0.0, 40.0).to_rgb();
        assert_component_eq!(rgb.red, 102.0, 1.0e-9);
        assert_component_eq!(rgb.green, 102.0, 1.0e-9);
        assert_component_eq!(rgb.blue, 102.0, 1.0e-9);
    }

    #[test]
    fn hsl_round_trip_stays_within_one_channel_unit() {
        for red in (0..=255).step_by(51) {
            for green in (0..=255).step_by(51) {
                for blue in (0..=255).step_by(51) {
                    let rgb = Rgb::new(red as Component, green as Component, blue as Component);
                    let back = rgb.to_hsl().to_rgb();
                    assert_component_eq!(back.red, rgb.red, 1.0);
                    assert_component_eq!(back.green, rgb.green, 1.0);
                    assert_component_eq!(back.blue, rgb.blue, 1.0);
                }
            }
        }
    }

    #[test]
    fn rgb_to_lab_known_values() {
        // CIE-Lab (D65) reference values for the sRGB primaries.
        let lab = Rgb::new(255.0, 0.0, 0.0).to_lab();
        assert_component_eq!(lab.lightness, 53.2408, 0.5);
        assert_component_eq!(lab.a, 80.0925, 0.5);
        assert_component_eq!(lab.b, 67.2032, 0.5);

        let lab = Rgb::new(0.0, 0.0, 255.0).to_lab();
        assert_component_eq!(lab.lightness, 32.2970, 0.5);
        assert_component_eq!(lab.a, 79.1875, 0.5);
        assert_component_eq!(lab.b, -107.8602, 0.5);

        let lab = Rgb::new(255.0, 255.0, 255.0).to_lab();
        assert_component_eq!(lab.lightness, 100.0, 0.1);
        assert_component_eq!(lab.a, 0.0, 0.1);
        assert_component_eq!(lab.b, 0.0, 0.1);
    }

    #[test]
    fn lab_round_trip_stays_within_two_channel_units() {
        for red in (0..=255).step_by(51) {
            for green in (0..=255).step_by(51) {
                for blue in (0..=255).step_by(51) {
                    let rgb = Rgb::new(red as Component, green as Component, blue as Component);
                    let back = rgb.to_lab().to_rgb();
                    assert_component_eq!(back.red, rgb.red, 2.0);
                    assert_component_eq!(back.green, rgb.green, 2.0);
                    assert_component_eq!(back.blue, rgb.blue, 2.0);
                }
            }
        }
    }

    #[test]
    fn out_of_gamut_lab_is_not_clamped_before_the_hex_boundary() {
        // A very chromatic green outside the sRGB gamut.
        let rgb = Lab::new(85.0, -120.0, 90.0).to_rgb();
        assert!(rgb.red < 0.0);

        // The hex boundary is where clamping happens.
        let hex = hex::format(&rgb);
        assert!(hex.starts_with("#00"));
    }
}
