use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

/// 8-bit sRGB colour shared by the window and the file exporter.
pub type Rgb = Srgb<u8>;

// ---------------------------------------------------------------------------
// Hue palette
// ---------------------------------------------------------------------------

/// The ten "deep" hues bar charts traditionally start with.
const DEEP: [(u8, u8, u8); 10] = [
    (0x4c, 0x72, 0xb0),
    (0xdd, 0x84, 0x52),
    (0x55, 0xa8, 0x68),
    (0xc4, 0x4e, 0x52),
    (0x81, 0x72, 0xb3),
    (0x93, 0x78, 0x60),
    (0xda, 0x8b, 0xc3),
    (0x8c, 0x8c, 0x8c),
    (0xcc, 0xb9, 0x74),
    (0x64, 0xb5, 0xcd),
];

/// Colours for `n` hue groups: the deep palette while it lasts, evenly
/// spaced hues once there are more groups than it has entries.
pub fn hue_palette(n: usize) -> Vec<Rgb> {
    if n <= DEEP.len() {
        DEEP[..n]
            .iter()
            .map(|&(r, g, b)| Rgb::new(r, g, b))
            .collect()
    } else {
        generate_palette(n)
    }
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            rgb.into_format::<u8>()
        })
        .collect()
}

// -- Backend conversions --

pub fn to_color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

pub fn to_plotters(c: Rgb) -> RGBColor {
    RGBColor(c.red, c.green, c.blue)
}
