//! Facelet detection module
//!
//! Locates the nine facelet sample points in a camera frame and classifies
//! them against the calibrated color registry.

pub mod classifier;
pub mod frame;
pub mod layout;

pub use classifier::{center_sample, sample_grid, Classifier, HsvGrid};
pub use frame::HsvFrame;
pub use layout::SampleLayout;
