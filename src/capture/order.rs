//! Guided capture order
//!
//! The default order shows Front, then turns the cube about its vertical
//! axis through Right, Back and Left, and finally tilts it to show Up and
//! Down. Each step is a single quarter-turn from the previous grip, so the
//! operator never has to regrasp the cube. The order is policy: any
//! permutation of the six faces is accepted.

use serde::{Deserialize, Serialize};

use crate::cube::FaceId;
use crate::error::{Result, ScanError};

/// Permutation of the six faces to capture in sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FaceId>", into = "Vec<FaceId>")]
pub struct CaptureOrder(Vec<FaceId>);

impl Default for CaptureOrder {
    fn default() -> Self {
        Self(vec![
            FaceId::Front,
            FaceId::Right,
            FaceId::Back,
            FaceId::Left,
            FaceId::Up,
            FaceId::Down,
        ])
    }
}

impl CaptureOrder {
    /// Custom order
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless `faces` names every face exactly once.
    pub fn new(faces: Vec<FaceId>) -> Result<Self> {
        let is_permutation = faces.len() == FaceId::ALL.len()
            && FaceId::ALL.iter().all(|face| faces.contains(face));
        if !is_permutation {
            let listed: String = faces.iter().map(|face| face.code()).collect();
            return Err(ScanError::invalid_parameter("capture_order", listed));
        }
        Ok(Self(faces))
    }

    /// Solver serialization order (U, R, F, D, L, B)
    pub fn solver_order() -> Self {
        Self(FaceId::ALL.to_vec())
    }

    /// Faces in capture order
    pub fn faces(&self) -> &[FaceId] {
        &self.0
    }
}

impl TryFrom<Vec<FaceId>> for CaptureOrder {
    type Error = ScanError;

    fn try_from(faces: Vec<FaceId>) -> Result<Self> {
        Self::new(faces)
    }
}

impl From<CaptureOrder> for Vec<FaceId> {
    fn from(order: CaptureOrder) -> Self {
        order.0
    }
}
