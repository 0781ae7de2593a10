//! Calibration constants and reference values for cube scanning
//!
//! This module contains compile-time constants for HSV thresholding,
//! face capture and profile storage.

/// HSV channel limits (OpenCV 8-bit convention)
///
/// Hue is stored as degrees / 2 so that it fits a byte; saturation and
/// value use the full byte range.
pub mod hsv {
    /// Maximum hue value (360° / 2)
    pub const HUE_MAX: u8 = 180;

    /// Maximum saturation value
    pub const SATURATION_MAX: u8 = 255;

    /// Maximum value (brightness) value
    pub const VALUE_MAX: u8 = 255;

    /// Per-channel maxima in (h, s, v) order
    pub const CHANNEL_MAX: [u8; 3] = [HUE_MAX, SATURATION_MAX, VALUE_MAX];
}

/// Tolerances used to derive range bounds from a calibrated center
///
/// The window is asymmetric: the upper value bound is always the channel
/// maximum, so bright highlights never fall out of range.
pub mod tolerance {
    /// Hue half-width below and above the center
    pub const HUE: i16 = 10;

    /// Saturation half-width below and above the center
    pub const SATURATION: i16 = 50;

    /// Value distance below the center
    pub const VALUE_BELOW: i16 = 50;
}

/// Face capture parameters
pub mod capture {
    /// Facelets per face
    pub const FACELETS_PER_FACE: usize = 9;

    /// Faces per cube
    pub const FACE_COUNT: usize = 6;

    /// Facelets in a full cube string
    pub const CUBE_FACELETS: usize = FACELETS_PER_FACE * FACE_COUNT;

    /// Index of the center facelet within a face (row-major)
    pub const CENTER_INDEX: usize = 4;

    /// Sample grid side (3x3 facelets)
    pub const GRID_SIDE: usize = 3;

    /// Fraction of the shorter frame side covered by the sampling square
    pub const ROI_DIVISOR: u32 = 2;
}

/// Profile storage defaults
pub mod storage {
    /// Default profile document path, relative to the working directory
    pub const DEFAULT_PROFILE_PATH: &str = "color_info.json";

    /// Default configuration file name
    pub const DEFAULT_CONFIG_PATH: &str = "scan_cube.json";
}

/// Solver collaborator conventions
pub mod solver {
    /// Substring (matched case-insensitively) that marks a solver rejection
    /// as a probable capture or classification error
    pub const LIKELY_MISCAPTURE_MARKER: &str = "probably";
}
