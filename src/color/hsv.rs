//! 8-bit HSV samples
//!
//! Hue is stored in half-degrees (0-180) so that every channel fits a byte,
//! matching what camera pipelines built on OpenCV deliver.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::hsv::{CHANNEL_MAX, HUE_MAX};

/// HSV triple with every channel clamped to its valid range
///
/// Serialized as a JSON array `[h, s, v]`. Out-of-range values read from a
/// document are clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct Hsv {
    h: u8,
    s: u8,
    v: u8,
}

impl Hsv {
    /// Create a sample, clamping hue to 180
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        let h = if h > HUE_MAX { HUE_MAX } else { h };
        Self { h, s, v }
    }

    /// Create a sample from signed channel values, clamping each channel
    pub fn clamped(h: i32, s: i32, v: i32) -> Self {
        Self::from_channels([h, s, v])
    }

    /// Create a sample from `[h, s, v]` channel values, clamping each channel
    pub fn from_channels(channels: [i32; 3]) -> Self {
        let mut out = [0u8; 3];
        for (slot, (value, max)) in out.iter_mut().zip(channels.iter().zip(CHANNEL_MAX)) {
            *slot = (*value).clamp(0, i32::from(max)) as u8;
        }
        Self {
            h: out[0],
            s: out[1],
            v: out[2],
        }
    }

    /// Hue in half-degrees (0-180)
    pub fn h(&self) -> u8 {
        self.h
    }

    /// Saturation (0-255)
    pub fn s(&self) -> u8 {
        self.s
    }

    /// Value (0-255)
    pub fn v(&self) -> u8 {
        self.v
    }

    /// Channels in `[h, s, v]` order
    pub fn channels(&self) -> [u8; 3] {
        [self.h, self.s, self.v]
    }
}

impl From<[i32; 3]> for Hsv {
    fn from(channels: [i32; 3]) -> Self {
        Self::from_channels(channels)
    }
}

impl From<Hsv> for [i32; 3] {
    fn from(hsv: Hsv) -> Self {
        [i32::from(hsv.h), i32::from(hsv.s), i32::from(hsv.v)]
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.h, self.s, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_hue() {
        let hsv = Hsv::new(200, 10, 20);
        assert_eq!(hsv.channels(), [180, 10, 20]);
    }

    #[test]
    fn test_clamped_handles_negative_and_overflow() {
        let hsv = Hsv::clamped(-10, 300, 128);
        assert_eq!(hsv.channels(), [0, 255, 128]);
    }

    #[test]
    fn test_json_array_form() {
        let hsv = Hsv::new(60, 200, 150);
        let json = serde_json::to_string(&hsv).unwrap();
        assert_eq!(json, "[60,200,150]");

        let parsed: Hsv = serde_json::from_str("[190,-5,256]").unwrap();
        assert_eq!(parsed.channels(), [180, 0, 255]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Hsv::new(1, 2, 3).to_string(), "(1, 2, 3)");
    }
}
