//! Classified face samples
//!
//! A `FaceSample` holds the nine color tags classified from one camera
//! frame, row-major, with the center facelet at index 4.

use std::fmt;
use std::str::FromStr;

use crate::color::ColorTag;
use crate::constants::capture::{CENTER_INDEX, FACELETS_PER_FACE};
use crate::cube::FaceId;
use crate::error::{Result, ScanError};

/// Nine classified facelet colors of one face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceSample([ColorTag; FACELETS_PER_FACE]);

impl FaceSample {
    /// Wrap nine row-major color tags
    pub fn new(tags: [ColorTag; FACELETS_PER_FACE]) -> Self {
        Self(tags)
    }

    /// Color tags in row-major order
    pub fn tags(&self) -> &[ColorTag; FACELETS_PER_FACE] {
        &self.0
    }

    /// Center facelet color
    pub fn center(&self) -> ColorTag {
        self.0[CENTER_INDEX]
    }

    /// Face identified by the center facelet, if its color is known
    pub fn center_face(&self) -> Option<FaceId> {
        FaceId::for_center(self.center())
    }

    /// Whether any facelet failed classification
    pub fn has_unknown(&self) -> bool {
        self.0.contains(&ColorTag::Unknown)
    }

    /// Translate colors to the solver's face-letter alphabet
    ///
    /// Returns `None` if any facelet is `Unknown`.
    pub fn to_facelets(&self) -> Option<[FaceId; FACELETS_PER_FACE]> {
        let mut facelets = [FaceId::Up; FACELETS_PER_FACE];
        for (slot, tag) in facelets.iter_mut().zip(self.0) {
            *slot = tag.face()?;
        }
        Some(facelets)
    }
}

impl FromStr for FaceSample {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        let count = s.chars().count();
        if count != FACELETS_PER_FACE {
            return Err(ScanError::InvalidLength {
                expected: FACELETS_PER_FACE,
                actual: count,
            });
        }

        let mut tags = [ColorTag::Unknown; FACELETS_PER_FACE];
        for (position, (slot, code)) in tags.iter_mut().zip(s.chars()).enumerate() {
            *slot = ColorTag::from_code(code).ok_or(ScanError::InvalidFacelet {
                found: code,
                position,
            })?;
        }
        Ok(Self(tags))
    }
}

impl fmt::Display for FaceSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in self.0 {
            write!(f, "{}", tag.code())?;
        }
        Ok(())
    }
}
