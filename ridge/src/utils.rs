use image::Rgba;
use palette::{FromColor, Hsv, Srgb};

use crate::source::UniformSource;

pub const BACKGROUND: Rgba<u8> = Rgba([0x22, 0x22, 0x22, 0xff]);
pub const RIDGE_FILL: Rgba<u8> = Rgba([0x54, 0x95, 0xed, 0xff]); // cornflower blue
pub const OUTLINE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

// Ranges for "happy" stroke colours: any hue, fairly saturated, bright
const SATURATION_RANGE: (f32, f32) = (0.5, 0.8);
const VALUE_RANGE: (f32, f32) = (0.7, 0.95);

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// Convert an sRGB colour into an opaque pixel
pub fn to_rgba(color: Srgb<f32>) -> Rgba<u8> {
    let c = color.into_format::<u8>();
    Rgba([c.red, c.green, c.blue, 0xff])
}

// Pick a random pleasant colour: hue, then saturation, then value.
pub fn happy_color(source: &mut impl UniformSource) -> Rgba<u8> {
    let hue = source.next_unit() as f32 * 360.0;
    let saturation = lerp(SATURATION_RANGE.0, SATURATION_RANGE.1, source.next_unit() as f32);
    let value = lerp(VALUE_RANGE.0, VALUE_RANGE.1, source.next_unit() as f32);
    let hsv: Hsv = Hsv::new(hue, saturation, value);
    to_rgba(Srgb::from_color(hsv))
}
