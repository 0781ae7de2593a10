//! Color representation, conversion and range matching
//!
//! This module handles the HSV sample type, the closed set of sticker
//! color tags, conversions between RGB and the 8-bit HSV scale, and the
//! adjustable HSV windows used to recognise each sticker color.

pub mod conversion;
pub mod hsv;
pub mod range;
pub mod tag;

pub use conversion::ColorConverter;
pub use hsv::Hsv;
pub use range::ColorRange;
pub use tag::ColorTag;
