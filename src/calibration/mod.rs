//! Color calibration module
//!
//! This module owns the set of calibrated sticker color ranges and the
//! named profiles that persist their centers between sessions.

pub mod profile;
pub mod registry;

pub use profile::{ColorSnapshot, JsonProfileStore, MemoryProfileStore, ProfileStore};
pub use registry::ColorRegistry;
