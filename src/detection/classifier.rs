//! Face classification
//!
//! Turns nine HSV samples into a [`FaceSample`] by classifying each one
//! against a [`ColorRegistry`]. Both calibration and capture go through
//! this type so they always agree on what a facelet looks like.

use tracing::debug;

use crate::calibration::ColorRegistry;
use crate::color::{ColorTag, Hsv};
use crate::constants::capture::{FACELETS_PER_FACE, GRID_SIDE};
use crate::cube::FaceSample;
use crate::detection::{HsvFrame, SampleLayout};
use crate::error::{Result, ScanError};

/// One representative HSV sample per facelet, `grid[row][col]`
pub type HsvGrid = [[Hsv; GRID_SIDE]; GRID_SIDE];

/// Classifies facelet samples with a borrowed registry
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    registry: &'a ColorRegistry,
}

impl<'a> Classifier<'a> {
    /// Classifier using the ranges currently held by `registry`
    pub fn new(registry: &'a ColorRegistry) -> Self {
        Self { registry }
    }

    /// Classify a single sample
    pub fn classify(&self, hsv: Hsv) -> ColorTag {
        self.registry.classify(hsv)
    }

    /// Classify a 3x3 grid in row-major order
    pub fn classify_grid(&self, grid: &HsvGrid) -> FaceSample {
        let mut tags = [ColorTag::Unknown; FACELETS_PER_FACE];
        for (slot, hsv) in tags.iter_mut().zip(grid.iter().flatten()) {
            *slot = self.classify(*hsv);
        }
        FaceSample::new(tags)
    }

    /// Sample and classify the nine facelets of a frame
    pub fn classify_frame(&self, frame: &HsvFrame) -> Result<FaceSample> {
        let grid = sample_grid(frame)?;
        let sample = self.classify_grid(&grid);
        debug!(sample = %sample, "frame classified");
        Ok(sample)
    }
}

/// Read the nine facelet samples of a frame
pub fn sample_grid(frame: &HsvFrame) -> Result<HsvGrid> {
    let layout = SampleLayout::for_frame(frame.width(), frame.height())?;
    let mut grid = [[Hsv::default(); GRID_SIDE]; GRID_SIDE];
    for (index, (x, y)) in layout.sample_points().into_iter().enumerate() {
        grid[index / GRID_SIDE][index % GRID_SIDE] = read_pixel(frame, x, y)?;
    }
    Ok(grid)
}

/// HSV at the middle of the sampling region, for calibration
pub fn center_sample(frame: &HsvFrame) -> Result<Hsv> {
    let layout = SampleLayout::for_frame(frame.width(), frame.height())?;
    let (x, y) = layout.center_point();
    read_pixel(frame, x, y)
}

fn read_pixel(frame: &HsvFrame, x: u32, y: u32) -> Result<Hsv> {
    frame
        .pixel(x, y)
        .ok_or_else(|| ScanError::invalid_parameter("sample point", format!("({}, {})", x, y)))
}
