//! # Scan Cube
//!
//! A Rust crate for reading the sticker colors of a 3x3 twisty cube from
//! camera samples and turning them into a solver-ready facelet string.
//!
//! This library provides:
//! - Calibrated HSV color ranges with named, persisted profiles
//! - Classification of a face's nine facelets from an HSV frame
//! - Guided and free face capture into a 54-facelet cube state
//! - A gateway to an external solver that explains rejected cubes
//!
//! ## Example
//!
//! ```rust
//! use scan_cube::{CaptureSession, Classifier, ColorRegistry, CubeState, HsvFrame, Hsv};
//!
//! let registry = ColorRegistry::with_defaults();
//! let classifier = Classifier::new(&registry);
//! let mut session = CaptureSession::new(CubeState::solved());
//! session.start_guided();
//!
//! // A frame showing the green face
//! let frame = HsvFrame::filled(640, 480, Hsv::new(60, 200, 200));
//! let sample = classifier.classify_frame(&frame)?;
//! session.submit(sample)?;
//!
//! println!("{}", session.cube());
//! # Ok::<(), scan_cube::ScanError>(())
//! ```

pub mod calibration;
pub mod capture;
pub mod color;
pub mod config;
pub mod constants;
pub mod cube;
pub mod detection;
pub mod error;
pub mod solver;

pub use calibration::{ColorRegistry, JsonProfileStore, MemoryProfileStore, ProfileStore};
pub use capture::{CaptureOrder, CaptureSession, CaptureState};
pub use color::{ColorRange, ColorTag, Hsv};
pub use config::ScanConfig;
pub use cube::{CubeState, FaceId, FaceSample};
pub use detection::{Classifier, HsvFrame};
pub use error::{Result, ScanError};
pub use solver::{CubeSolver, SolverGateway, Verdict};
