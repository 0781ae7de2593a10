//! Cube facelet state
//!
//! Holds the six faces in the solver's facelet alphabet. Only structural
//! invariants (length and alphabet) are enforced here; whether a state is
//! reachable is decided by the solver collaborator through
//! [`SolverGateway`](crate::solver::SolverGateway).

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::constants::capture::{CUBE_FACELETS, FACELETS_PER_FACE, GRID_SIDE};
use crate::cube::{FaceId, FaceSample};
use crate::error::{Result, ScanError};
use crate::solver::{CubeSolver, SolverGateway, Verdict};

type Face = [FaceId; FACELETS_PER_FACE];

/// Six faces of nine facelets, serialized in U, R, F, D, L, B order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [Face; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    /// Solved cube: every facelet carries its face's own letter
    pub fn solved() -> Self {
        Self {
            faces: FaceId::ALL.map(|face| [face; FACELETS_PER_FACE]),
        }
    }

    /// Parse a 54-facelet cube string
    ///
    /// # Errors
    ///
    /// `InvalidLength` unless the string has exactly 54 characters,
    /// `InvalidFacelet` for characters outside `URFDLB`.
    pub fn from_string(s: &str) -> Result<Self> {
        let facelets = parse_facelets(s, CUBE_FACELETS)?;
        let mut faces = [[FaceId::Up; FACELETS_PER_FACE]; 6];
        for (face, chunk) in faces.iter_mut().zip(facelets.chunks_exact(FACELETS_PER_FACE)) {
            face.copy_from_slice(chunk);
        }
        Ok(Self { faces })
    }

    /// Facelets of one face, row-major
    pub fn face(&self, face: FaceId) -> &[FaceId; FACELETS_PER_FACE] {
        &self.faces[face.index()]
    }

    /// Facelets of one face as a 9-letter string
    pub fn face_string(&self, face: FaceId) -> String {
        self.face(face).iter().map(|f| f.code()).collect()
    }

    /// Replace one face from a 9-letter string
    ///
    /// The face is replaced atomically; on error the state is unchanged.
    pub fn update_face(&mut self, face: FaceId, facelets: &str) -> Result<()> {
        let parsed = parse_facelets(facelets, FACELETS_PER_FACE)?;
        let mut replacement = [FaceId::Up; FACELETS_PER_FACE];
        replacement.copy_from_slice(&parsed);
        self.replace_face(face, replacement);
        Ok(())
    }

    pub(crate) fn replace_face(&mut self, face: FaceId, facelets: Face) {
        self.faces[face.index()] = facelets;
        info!(face = %face, facelets = %self.face_string(face), "face updated");
    }

    /// Whether a classified 9-tag color string may be committed
    ///
    /// False for anything that is not nine color tags, and for any sample
    /// containing the unknown tag.
    pub fn is_capturable(colors: &str) -> bool {
        colors
            .parse::<FaceSample>()
            .map(|sample| !sample.has_unknown())
            .unwrap_or(false)
    }

    /// Restore the solved state
    pub fn reset(&mut self) {
        *self = Self::solved();
        info!("cube reset to solved state");
    }

    /// Ask the solver collaborator whether this state is solvable
    pub fn verdict<S: CubeSolver>(&self, gateway: &SolverGateway<S>) -> Verdict {
        gateway.check_valid(&self.to_string())
    }

    /// Unfolded text net: Up above Front, then Left Front Right Back, Down below
    pub fn net(&self) -> String {
        let indent = " ".repeat(GRID_SIDE + 1);
        let mut out = String::new();

        let row = |face: FaceId, r: usize| -> String {
            self.face(face)[r * GRID_SIDE..(r + 1) * GRID_SIDE]
                .iter()
                .map(|f| f.code())
                .collect()
        };

        for r in 0..GRID_SIDE {
            out.push_str(&indent);
            out.push_str(&row(FaceId::Up, r));
            out.push('\n');
        }
        for r in 0..GRID_SIDE {
            let middle: Vec<String> = [FaceId::Left, FaceId::Front, FaceId::Right, FaceId::Back]
                .into_iter()
                .map(|face| row(face, r))
                .collect();
            out.push_str(&middle.join(" "));
            out.push('\n');
        }
        for r in 0..GRID_SIDE {
            out.push_str(&indent);
            out.push_str(&row(FaceId::Down, r));
            out.push('\n');
        }
        out
    }
}

impl FromStr for CubeState {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in &self.faces {
            for facelet in face {
                write!(f, "{}", facelet.code())?;
            }
        }
        Ok(())
    }
}

fn parse_facelets(s: &str, expected: usize) -> Result<Vec<FaceId>> {
    let actual = s.chars().count();
    if actual != expected {
        return Err(ScanError::InvalidLength { expected, actual });
    }
    s.chars()
        .enumerate()
        .map(|(position, found)| {
            FaceId::from_code(found).ok_or(ScanError::InvalidFacelet { found, position })
        })
        .collect()
}
