//! Solver gateway
//!
//! The collaborator answers with either a move sequence or a free-text
//! rejection. Rejections are split into two verdicts by looking for the
//! word "probably" in the message: solvers of the two-phase family phrase
//! errors that usually come from a mis-scanned sticker that way
//! ("... probably cannot be solved"). This is a heuristic over message
//! text, not a guaranteed contract, and must be revisited if the
//! collaborator's wording changes.

use std::fmt;

use tracing::{info, warn};

use crate::constants::solver::LIKELY_MISCAPTURE_MARKER;
use crate::cube::CubeState;
use crate::error::{Result, ScanError};

/// External solving collaborator
pub trait CubeSolver {
    /// Move sequence for a 54-facelet cube string, or a human-readable
    /// reason the cube was rejected
    fn solve(&self, facelets: &str) -> std::result::Result<String, String>;
}

impl<F> CubeSolver for F
where
    F: Fn(&str) -> std::result::Result<String, String>,
{
    fn solve(&self, facelets: &str) -> std::result::Result<String, String> {
        self(facelets)
    }
}

/// Solvability of a cube string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The collaborator produced a solution
    Solvable,
    /// No legal cube has this facelet arrangement
    StructurallyInvalid(String),
    /// The rejection reads like a capture or classification mistake
    ColorAssignmentLikelyWrong(String),
}

impl Verdict {
    /// Whether the cube can be handed to `solve`
    pub fn is_solvable(&self) -> bool {
        matches!(self, Verdict::Solvable)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Solvable => write!(f, "Valid"),
            Verdict::StructurallyInvalid(reason) => write!(f, "Invalid cube: {}", reason),
            Verdict::ColorAssignmentLikelyWrong(reason) => {
                write!(f, "Colors probably mis-scanned: {}", reason)
            }
        }
    }
}

/// Classify a collaborator rejection message
pub fn classify_rejection(message: &str) -> Verdict {
    if message
        .to_lowercase()
        .contains(LIKELY_MISCAPTURE_MARKER)
    {
        Verdict::ColorAssignmentLikelyWrong(message.to_string())
    } else {
        Verdict::StructurallyInvalid(message.to_string())
    }
}

/// Gateway wrapping a solver collaborator
#[derive(Debug, Clone)]
pub struct SolverGateway<S> {
    solver: S,
}

impl<S: CubeSolver> SolverGateway<S> {
    /// Gateway calling `solver`
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    /// Check whether `cube` is solvable
    ///
    /// Strings that are not 54 face letters are structurally invalid and
    /// never reach the collaborator.
    pub fn check_valid(&self, cube: &str) -> Verdict {
        self.evaluate(cube).0
    }

    /// Solve `cube`
    ///
    /// # Errors
    ///
    /// `NotSolvable` carrying the verdict unless the cube is solvable.
    pub fn solve(&self, cube: &str) -> Result<String> {
        match self.evaluate(cube) {
            (Verdict::Solvable, Some(moves)) => Ok(moves),
            (verdict, _) => Err(ScanError::NotSolvable { verdict }),
        }
    }

    /// Solve the cube held in `state`
    pub fn solve_state(&self, state: &CubeState) -> Result<String> {
        self.solve(&state.to_string())
    }

    fn evaluate(&self, cube: &str) -> (Verdict, Option<String>) {
        if let Err(e) = CubeState::from_string(cube) {
            let verdict = Verdict::StructurallyInvalid(e.to_string());
            warn!(%verdict, "cube string rejected before solving");
            return (verdict, None);
        }

        match self.solver.solve(cube) {
            Ok(moves) => {
                info!(moves = %moves, "cube solved");
                (Verdict::Solvable, Some(moves))
            }
            Err(message) => {
                let verdict = classify_rejection(&message);
                warn!(%verdict, "solver rejected cube");
                (verdict, None)
            }
        }
    }
}
