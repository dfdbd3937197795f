use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::aggregate::normalize_cause;

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
            let hsl = Hsl::new(hue, 0.70, 0.55);
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
// Color mapping: cause → Color32
// ---------------------------------------------------------------------------

/// Maps each known cause to a distinct colour for pie slices and legends.
#[derive(Debug, Clone, Default)]
pub struct CauseColors {
    mapping: BTreeMap<String, Color32>,
}

impl CauseColors {
    /// Build a colour map from canonical cause labels.
    pub fn new<'a>(causes: impl Iterator<Item = &'a str>) -> Self {
        let keys: Vec<String> = causes.map(normalize_cause).collect();
        let palette = generate_palette(keys.len());
        let mapping = keys.into_iter().zip(palette).collect();
        CauseColors { mapping }
    }

    /// Look up the colour for a cause label (any casing).
    pub fn color_for(&self, cause: &str) -> Color32 {
        self.mapping
            .get(&normalize_cause(cause))
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}
