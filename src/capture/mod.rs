//! Face capture module
//!
//! Drives which face the operator must show next and commits accepted
//! face samples into the cube state.

pub mod order;
pub mod session;

pub use order::CaptureOrder;
pub use session::{CapturePrompt, CaptureSession, CaptureState, LastSample};
