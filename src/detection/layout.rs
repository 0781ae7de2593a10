//! Facelet sampling geometry
//!
//! The operator holds one face inside a centered square region covering
//! half of the frame's shorter side. The region is split into a 3x3 grid
//! and each facelet is sampled at the center pixel of its cell.

use crate::constants::capture::{FACELETS_PER_FACE, GRID_SIDE, ROI_DIVISOR};
use crate::error::{Result, ScanError};

/// Pixel positions of the sampling region within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleLayout {
    roi_x: u32,
    roi_y: u32,
    roi_size: u32,
    cell_size: u32,
}

/// Axis-aligned pixel rectangle (x, y, side)
pub type CellRect = (u32, u32, u32);

impl SampleLayout {
    /// Layout for a frame of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the frame is too small to hold a
    /// non-empty 3x3 grid.
    pub fn for_frame(width: u32, height: u32) -> Result<Self> {
        let roi_size = width.min(height) / ROI_DIVISOR;
        let cell_size = roi_size / GRID_SIDE as u32;
        if cell_size == 0 {
            return Err(ScanError::invalid_parameter(
                "frame",
                format!("{}x{}", width, height),
            ));
        }

        Ok(Self {
            roi_x: (width - roi_size) / 2,
            roi_y: (height - roi_size) / 2,
            roi_size,
            cell_size,
        })
    }

    /// Sampling region as (x, y, side)
    pub fn region(&self) -> CellRect {
        (self.roi_x, self.roi_y, self.roi_size)
    }

    /// Cell rectangle for facelet `index` (row-major), for overlay drawing
    pub fn cell(&self, index: usize) -> Option<CellRect> {
        if index >= FACELETS_PER_FACE {
            return None;
        }
        let row = (index / GRID_SIDE) as u32;
        let col = (index % GRID_SIDE) as u32;
        Some((
            self.roi_x + col * self.cell_size,
            self.roi_y + row * self.cell_size,
            self.cell_size,
        ))
    }

    /// Sample pixel of every facelet, row-major
    pub fn sample_points(&self) -> [(u32, u32); FACELETS_PER_FACE] {
        let mut points = [(0, 0); FACELETS_PER_FACE];
        for (index, point) in points.iter_mut().enumerate() {
            let row = (index / GRID_SIDE) as u32;
            let col = (index % GRID_SIDE) as u32;
            *point = (
                self.roi_x + col * self.cell_size + self.cell_size / 2,
                self.roi_y + row * self.cell_size + self.cell_size / 2,
            );
        }
        points
    }

    /// Pixel at the middle of the sampling region
    ///
    /// Calibration reads the center-from-sample color here.
    pub fn center_point(&self) -> (u32, u32) {
        (
            self.roi_x + self.roi_size / 2,
            self.roi_y + self.roi_size / 2,
        )
    }
}
