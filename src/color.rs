use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: room count → Color32
// ---------------------------------------------------------------------------

/// Maps each room count in the table to a distinct colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<u32, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(rooms: &BTreeSet<u32>) -> Self {
        let palette = generate_palette(rooms.len());
        ColorMap {
            mapping: rooms.iter().copied().zip(palette).collect(),
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, rooms: u32) -> Color32 {
        self.mapping
            .get(&rooms)
            .copied()
            .unwrap_or(self.default_color)
    }
}
