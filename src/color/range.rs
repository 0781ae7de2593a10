//! Adjustable HSV windows for sticker colors
//!
//! A `ColorRange` recognises one sticker color. It is recalibrated either by
//! setting a new center (bounds are derived from fixed per-channel
//! tolerances) or by editing the bounds directly. In both cases every
//! channel keeps `lower <= upper`; crossing bounds are clamped, never
//! rejected.

use tracing::debug;

use crate::color::{ColorTag, Hsv};
use crate::constants::hsv::VALUE_MAX;
use crate::constants::tolerance;

/// HSV window recognising one sticker color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRange {
    tag: ColorTag,
    center: Hsv,
    lower: Hsv,
    upper: Hsv,
}

impl ColorRange {
    /// Create a range whose bounds are derived from `center`
    pub fn from_center(tag: ColorTag, center: Hsv) -> Self {
        let (lower, upper) = derive_bounds(center);
        Self {
            tag,
            center,
            lower,
            upper,
        }
    }

    /// Create a range from explicit bounds
    ///
    /// The nominal center sits one tolerance step above `lower` on each
    /// channel, which is where a calibration sample would have put it.
    pub fn with_bounds(tag: ColorTag, lower: Hsv, upper: Hsv) -> Self {
        let center = Hsv::clamped(
            i32::from(lower.h()) + i32::from(tolerance::HUE),
            i32::from(lower.s()) + i32::from(tolerance::SATURATION),
            i32::from(lower.v()) + i32::from(tolerance::VALUE_BELOW),
        );
        let mut range = Self {
            tag,
            center,
            lower,
            upper,
        };
        range.set_bounds(lower, upper);
        range
    }

    /// Color this range recognises
    pub fn tag(&self) -> ColorTag {
        self.tag
    }

    /// Calibrated center sample
    pub fn center(&self) -> Hsv {
        self.center
    }

    /// Inclusive lower bound
    pub fn lower(&self) -> Hsv {
        self.lower
    }

    /// Inclusive upper bound
    pub fn upper(&self) -> Hsv {
        self.upper
    }

    /// Set a new center and recompute both bounds from the tolerances
    pub fn update(&mut self, center: Hsv) {
        let (lower, upper) = derive_bounds(center);
        self.center = center;
        self.lower = lower;
        self.upper = upper;
        debug!(
            color = self.tag.long_name(),
            %center,
            lower = %self.lower,
            upper = %self.upper,
            "color range updated"
        );
    }

    /// Replace the bounds directly
    ///
    /// Where `lower` exceeds `upper` on a channel, `lower` is pulled down to
    /// `upper`. The center is left as calibrated.
    pub fn set_bounds(&mut self, lower: Hsv, upper: Hsv) {
        let lo = lower.channels();
        let hi = upper.channels();
        self.lower = Hsv::new(lo[0].min(hi[0]), lo[1].min(hi[1]), lo[2].min(hi[2]));
        self.upper = upper;
    }

    /// Whether every channel of `hsv` lies within `[lower, upper]`
    pub fn matches(&self, hsv: Hsv) -> bool {
        let value = hsv.channels();
        let lo = self.lower.channels();
        let hi = self.upper.channels();
        (0..3).all(|i| lo[i] <= value[i] && value[i] <= hi[i])
    }
}

fn derive_bounds(center: Hsv) -> (Hsv, Hsv) {
    let h = i32::from(center.h());
    let s = i32::from(center.s());
    let v = i32::from(center.v());

    let hue = i32::from(tolerance::HUE);
    let sat = i32::from(tolerance::SATURATION);

    let lower = Hsv::clamped(h - hue, s - sat, v - i32::from(tolerance::VALUE_BELOW));
    let upper = Hsv::clamped(h + hue, s + sat, i32::from(VALUE_MAX));
    (lower, upper)
}
