use std::str::FromStr;

use eframe::egui::Color32;
use palette::{Darken, Hsl, IntoColor, Srgb};

use crate::classifier::Label;
use crate::config::AppConfig;

// ---------------------------------------------------------------------------
// Hex parsing / shading
// ---------------------------------------------------------------------------

/// Parse `#RRGGBB` (or `RRGGBB`) into an egui colour.
pub fn hex_to_color32(hex: &str) -> Option<Color32> {
    let rgb = Srgb::<u8>::from_str(hex).ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Same hue, lower lightness. `amount` is relative, in `0.0..=1.0`.
pub fn darker(color: Color32, amount: f32) -> Color32 {
    let rgb: Srgb = Srgb::new(color.r(), color.g(), color.b()).into_format();
    let hsl: Hsl = rgb.into_color();
    let shaded: Srgb = hsl.darken(amount).into_color();
    let shaded: Srgb<u8> = shaded.into_format();
    Color32::from_rgb(shaded.red, shaded.green, shaded.blue)
}

// ---------------------------------------------------------------------------
// Label colours
// ---------------------------------------------------------------------------

/// Fixed fill colour per label, used by the chart and the results table.
#[derive(Debug, Clone, Copy)]
pub struct LabelColors {
    pub faux: Color32,
    pub vrai: Color32,
}

impl LabelColors {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            faux: hex_to_color32(&config.fake_color).unwrap_or(Color32::LIGHT_RED),
            vrai: hex_to_color32(&config.genuine_color).unwrap_or(Color32::LIGHT_BLUE),
        }
    }

    pub fn color_for(&self, label: Label) -> Color32 {
        match label {
            Label::Faux => self.faux,
            Label::Vrai => self.vrai,
        }
    }

    /// Outline drawn around a bar of the given label.
    pub fn stroke_for(&self, label: Label) -> Color32 {
        darker(self.color_for(label), 0.3)
    }
}
