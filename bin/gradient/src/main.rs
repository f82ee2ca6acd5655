use std::collections::HashSet;

use banded::{hex, smooth, Algorithm};
use image::{Rgba, RgbaImage};

const WIDTH: u32 = 1000;
const HEIGHT_PER_STRIP: u32 = 100;

fn main() {
    // A coarse ramp with deliberately harsh interior bands. The first,
    // middle and last bands are locked anchors.
    let bands: Vec<String> = [
        "#d03a2b", "#452d63", "#e0c040", "#1d5f3c", "#3a6fd0", "#7a2d63", "#e08040", "#1d3c5f",
        "#30c0a0",
    ]
    .iter()
    .map(|band| band.to_string())
    .collect();

    let locked = HashSet::from([0, 4, bands.len() - 1]);

    let strips = [
        bands.clone(),
        smooth(&bands, &locked, Algorithm::Rgb, 1.0),
        smooth(&bands, &locked, Algorithm::Hsl, 1.0),
        smooth(&bands, &locked, Algorithm::Lab, 1.0),
        smooth(&bands, &locked, Algorithm::Bezier, 1.0),
    ];

    let height = strips.len() as u32 * HEIGHT_PER_STRIP;

    let mut img = RgbaImage::new(WIDTH, height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let strip = &strips[(y / HEIGHT_PER_STRIP) as usize];
        let band = x as usize * strip.len() / WIDTH as usize;
        let color = hex::parse(&strip[band]).unwrap_or_default();

        *pixel = Rgba([
            color.red.round() as u8,
            color.green.round() as u8,
            color.blue.round() as u8,
            255,
        ]);
    }

    img.save("out.png")
        .expect("could not write image to out.png");
}
