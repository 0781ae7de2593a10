//! Color space conversion utilities
//!
//! Provides conversions between camera RGB and the 8-bit HSV scale used for
//! thresholding:
//! - RGB (0-255) to HSV (hue 0-180, saturation/value 0-255)
//! - HSV back to RGB for calibration swatches
//! - Hex color representation

use palette::{FromColor, Hsv as PaletteHsv, Srgb};

use crate::color::Hsv;

/// Converter between camera RGB and 8-bit HSV
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Convert RGB (0-255) to 8-bit HSV
    ///
    /// # Arguments
    ///
    /// * `r`, `g`, `b` - RGB values in range [0, 255]
    ///
    /// # Returns
    ///
    /// HSV with hue in half-degrees
    pub fn rgb_to_hsv(&self, r: u8, g: u8, b: u8) -> Hsv {
        let srgb = Srgb::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        );
        let hsv: PaletteHsv = PaletteHsv::from_color(srgb);

        let half_degrees = (hsv.hue.into_positive_degrees() / 2.0).round() as i32;
        let saturation = (hsv.saturation * 255.0).round() as i32;
        let value = (hsv.value * 255.0).round() as i32;

        // 359.5° rounds up to a full turn
        Hsv::clamped(half_degrees % 180, saturation, value)
    }

    /// Convert 8-bit HSV to RGB (0-255)
    ///
    /// Used to paint the swatch shown next to each calibration slider.
    pub fn hsv_to_rgb(&self, hsv: Hsv) -> [u8; 3] {
        let color: PaletteHsv = PaletteHsv::new(
            f32::from(hsv.h()) * 2.0,
            f32::from(hsv.s()) / 255.0,
            f32::from(hsv.v()) / 255.0,
        );
        let srgb: Srgb<u8> = Srgb::<f32>::from_color(color).into_format();
        [srgb.red, srgb.green, srgb.blue]
    }

    /// Convert RGB to hexadecimal color string
    ///
    /// # Returns
    ///
    /// Hex color string (e.g., "#FF0000")
    pub fn rgb_to_hex(&self, rgb: [u8; 3]) -> String {
        format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
    }

    /// Hex swatch for an HSV sample
    pub fn hsv_to_hex(&self, hsv: Hsv) -> String {
        self.rgb_to_hex(self.hsv_to_rgb(hsv))
    }
}
