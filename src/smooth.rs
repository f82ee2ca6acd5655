//! The segment smoothing engine.
//!
//! Given a sequence of hex colors and a set of locked indices, the
//! engine partitions the sequence into segments bounded by anchors,
//! interpolates each segment's interior under the chosen algorithm and
//! blends the result against the original sequence by a strength
//! factor. Anchor positions keep their input bytes at any strength.

use std::collections::HashSet;

use num_traits::Float;

use crate::color::Component;
use crate::hex;
use crate::hsl::Hsl;
use crate::lab::Lab;
use crate::math::normalize_hue;
use crate::rgb::Rgb;
use crate::segment::{find_segments, Segment};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// The interpolation metric used to smooth segment interiors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Linear interpolation of the RGB channels.
    Rgb,
    /// Interpolation in the HSL notation, following the shorter arc
    /// around the hue circle.
    Hsl,
    /// Interpolation in the CIE-Lab color space.
    Lab,
    /// A cubic Bezier in RGB with auto-generated control points.
    Bezier,
}

impl Algorithm {
    /// Look up an algorithm by its lowercase name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "rgb" => Some(Self::Rgb),
            "hsl" => Some(Self::Hsl),
            "lab" => Some(Self::Lab),
            "bezier" => Some(Self::Bezier),
            _ => None,
        }
    }
}

/// Smooth the unlocked bands of `colors`.
///
/// Locked indices, and the sequence endpoints acting as implicit
/// anchors, are preserved untouched. The remaining bands are rewritten
/// with values interpolated across each segment under `algorithm`, then
/// blended against the original sequence by `strength` (0 leaves the
/// input unchanged, 1 applies the full algorithm output).
pub fn smooth<S: AsRef<str>>(
    colors: &[S],
    locked: &HashSet<usize>,
    algorithm: Algorithm,
    strength: Component,
) -> Vec<String> {
    let smoothed = interpolate_segments(colors, locked, algorithm);
    apply_with_strength(colors, smoothed, strength)
}

/// Smooth with a string-keyed algorithm name.
///
/// An unrecognized name leaves the sequence unchanged, bypassing the
/// strength blend as well.
pub fn smooth_named<S: AsRef<str>>(
    colors: &[S],
    locked: &HashSet<usize>,
    algorithm: &str,
    strength: Component,
) -> Vec<String> {
    match Algorithm::parse(algorithm) {
        Some(algorithm) => smooth(colors, locked, algorithm, strength),
        None => to_owned(colors),
    }
}

fn to_owned<S: AsRef<str>>(colors: &[S]) -> Vec<String> {
    colors.iter().map(|color| color.as_ref().to_string()).collect()
}

/// Unparseable entries decode as black; conversion failures are local
/// and never abort the engine.
fn decode(color: &str) -> Rgb {
    hex::parse(color).unwrap_or_default()
}

/// Replace the interior of every segment with colors interpolated
/// between its anchor endpoints under the chosen algorithm.
fn interpolate_segments<S: AsRef<str>>(
    colors: &[S],
    locked: &HashSet<usize>,
    algorithm: Algorithm,
) -> Vec<String> {
    let mut smoothed = to_owned(colors);

    for segment in find_segments(locked, colors.len()) {
        let start = decode(colors[segment.start].as_ref());
        let end = decode(colors[segment.end].as_ref());

        match algorithm {
            Algorithm::Rgb => fill_rgb(&mut smoothed, &segment, &start, &end),
            Algorithm::Hsl => fill_hsl(&mut smoothed, &segment, &start, &end),
            Algorithm::Lab => fill_lab(&mut smoothed, &segment, &start, &end),
            Algorithm::Bezier => fill_bezier(&mut smoothed, &segment, &start, &end),
        }
    }

    smoothed
}

fn fill_rgb(smoothed: &mut [String], segment: &Segment, start: &Rgb, end: &Rgb) {
    for index in segment.interior() {
        let t = segment.factor(index);
        smoothed[index] = hex::format(&Rgb::new(
            lerp(start.red, end.red, t),
            lerp(start.green, end.green, t),
            lerp(start.blue, end.blue, t),
        ));
    }
}

fn fill_hsl(smoothed: &mut [String], segment: &Segment, start: &Rgb, end: &Rgb) {
    let start = start.to_hsl();
    let mut end = end.to_hsl();

    // Follow the shorter arc around the hue circle.
    let diff = end.hue - start.hue;
    if diff > 180.0 {
        end.hue -= 360.0;
    } else if diff < -180.0 {
        end.hue += 360.0;
    }

    for index in segment.interior() {
        let t = segment.factor(index);
        let color = Hsl::new(
            normalize_hue(lerp(start.hue, end.hue, t)),
            lerp(start.saturation, end.saturation, t),
            lerp(start.lightness, end.lightness, t),
        );
        smoothed[index] = hex::format(&color.to_rgb());
    }
}

fn fill_lab(smoothed: &mut [String], segment: &Segment, start: &Rgb, end: &Rgb) {
    let start = start.to_lab();
    let end = end.to_lab();

    for index in segment.interior() {
        let t = segment.factor(index);
        let color = Lab::new(
            lerp(start.lightness, end.lightness, t),
            lerp(start.a, end.a, t),
            lerp(start.b, end.b, t),
        );
        smoothed[index] = hex::format(&color.to_rgb());
    }
}

fn fill_bezier(smoothed: &mut [String], segment: &Segment, start: &Rgb, end: &Rgb) {
    // Control points sit a quarter of the way in from each endpoint.
    let p1 = Rgb::new(
        lerp(start.red, end.red, 0.25),
        lerp(start.green, end.green, 0.25),
        lerp(start.blue, end.blue, 0.25),
    );
    let p2 = Rgb::new(
        lerp(start.red, end.red, 0.75),
        lerp(start.green, end.green, 0.75),
        lerp(start.blue, end.blue, 0.75),
    );

    for index in segment.interior() {
        let t = segment.factor(index);
        smoothed[index] = hex::format(&Rgb::new(
            cubic_bezier(start.red, p1.red, p2.red, end.red, t),
            cubic_bezier(start.green, p1.green, p2.green, end.green, t),
            cubic_bezier(start.blue, p1.blue, p2.blue, end.blue, t),
        ));
    }
}

/// Evaluate the cubic Bezier basis at `t` for a single channel.
fn cubic_bezier(
    p0: Component,
    p1: Component,
    p2: Component,
    p3: Component,
    t: Component,
) -> Component {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Blend the algorithm output against the original sequence.
///
/// Entries the algorithm left untouched pass through with their
/// original bytes, so anchors survive any strength verbatim; rewritten
/// entries are decoded, channel-interpolated by `strength` and
/// re-encoded.
fn apply_with_strength<S: AsRef<str>>(
    original: &[S],
    smoothed: Vec<String>,
    strength: Component,
) -> Vec<String> {
    if strength <= 0.0 {
        return to_owned(original);
    }
    if strength >= 1.0 {
        return smoothed;
    }

    original
        .iter()
        .zip(smoothed)
        .map(|(original, smoothed)| {
            let original = original.as_ref();
            if original == smoothed {
                return original.to_string();
            }

            let from = decode(original);
            let to = decode(&smoothed);

            hex::format(&Rgb::new(
                lerp(from.red, to.red, strength),
                lerp(from.green, to.green, strength),
                lerp(from.blue, to.blue, strength),
            ))
        })
        .collect()
}
