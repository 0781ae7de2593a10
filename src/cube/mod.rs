//! Cube state model
//!
//! Six faces of nine facelets in the solver's facelet alphabet, the fixed
//! center-color table, and face sample parsing.

pub mod face;
pub mod sample;
pub mod state;

pub use face::FaceId;
pub use sample::FaceSample;
pub use state::CubeState;
