//! Guided capture state machine
//!
//! In free capture (`Idle`) any fully classified sample is committed to
//! the face named by its center color. Guided capture walks a
//! [`CaptureOrder`] and only accepts the face it is waiting for; a wrong
//! face leaves everything untouched so the operator can simply turn the
//! cube and try again.
//!
//! A session owns its [`CubeState`] and is driven from a single control
//! thread. It is not reentrant: share it behind a lock if frames and
//! operator commands arrive on different threads.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, info, warn};

use crate::capture::CaptureOrder;
use crate::constants::capture::CENTER_INDEX;
use crate::cube::{CubeState, FaceId, FaceSample};
use crate::error::{Result, ScanError};

/// Capture mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Free capture
    Idle,
    /// Guided capture waiting for this face
    AwaitingFace(FaceId),
    /// Guided capture finished; further samples are free captures
    Complete,
}

/// Most recent classification seen by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastSample {
    pub sample: FaceSample,
    /// Face named by the center, if it classified
    pub face: Option<FaceId>,
}

/// Instruction for the operator during guided capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturePrompt {
    pub face: FaceId,
}

impl fmt::Display for CapturePrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Show the {} face ({} center)",
            self.face.name(),
            self.face.center_color().long_name()
        )
    }
}

/// Capture session committing face samples into a cube
#[derive(Debug, Clone)]
pub struct CaptureSession {
    state: CaptureState,
    order: CaptureOrder,
    pending: VecDeque<FaceId>,
    last_sample: Option<LastSample>,
    cube: CubeState,
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new(CubeState::default())
    }
}

impl CaptureSession {
    /// Idle session over `cube` using the default guided order
    pub fn new(cube: CubeState) -> Self {
        Self::with_order(cube, CaptureOrder::default())
    }

    /// Idle session over `cube` with a custom guided order
    pub fn with_order(cube: CubeState, order: CaptureOrder) -> Self {
        Self {
            state: CaptureState::Idle,
            order,
            pending: VecDeque::new(),
            last_sample: None,
            cube,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn order(&self) -> &CaptureOrder {
        &self.order
    }

    /// Face guided capture is waiting for
    pub fn expected_face(&self) -> Option<FaceId> {
        match self.state {
            CaptureState::AwaitingFace(face) => Some(face),
            _ => None,
        }
    }

    /// Faces still to capture in guided mode, next one first
    pub fn pending_order(&self) -> Vec<FaceId> {
        self.pending.iter().copied().collect()
    }

    pub fn last_sample(&self) -> Option<&LastSample> {
        self.last_sample.as_ref()
    }

    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    /// Mutable cube, for manual face edits
    pub fn cube_mut(&mut self) -> &mut CubeState {
        &mut self.cube
    }

    pub fn into_cube(self) -> CubeState {
        self.cube
    }

    /// What the operator should show next, while guided capture runs
    pub fn prompt(&self) -> Option<CapturePrompt> {
        self.expected_face().map(|face| CapturePrompt { face })
    }

    /// Begin guided capture from the first face of the order
    ///
    /// Restarting discards the remaining order but keeps faces already
    /// committed to the cube.
    pub fn start_guided(&mut self) {
        self.pending = self.order.faces().iter().copied().collect();
        self.state = match self.pending.front() {
            Some(&face) => CaptureState::AwaitingFace(face),
            None => CaptureState::Complete,
        };
        info!(order = ?self.order.faces(), "guided capture started");
    }

    /// Leave guided capture and return to free capture
    pub fn cancel_guided(&mut self) {
        if self.state != CaptureState::Idle {
            info!(remaining = self.pending.len(), "guided capture cancelled");
        }
        self.pending.clear();
        self.state = CaptureState::Idle;
    }

    /// Return to free capture over a solved cube
    pub fn reset(&mut self) {
        self.cancel_guided();
        self.last_sample = None;
        self.cube.reset();
    }

    /// Record a classification without committing it
    pub fn observe(&mut self, sample: FaceSample) {
        self.last_sample = Some(LastSample {
            sample,
            face: sample.center_face(),
        });
    }

    /// Commit the most recently observed sample
    ///
    /// # Errors
    ///
    /// `NothingObserved` if no sample has been observed, otherwise as
    /// [`submit`](Self::submit).
    pub fn submit_observed(&mut self) -> Result<FaceId> {
        let last = self.last_sample.ok_or(ScanError::NothingObserved)?;
        self.submit(last.sample)
    }

    /// Commit a classified face sample
    ///
    /// Returns the face that was written.
    ///
    /// # Errors
    ///
    /// * `UnknownColorDetected` if any facelet failed classification
    /// * `FaceMismatch` if guided capture expects a different face
    ///
    /// Neither the cube nor the guided position changes on error.
    pub fn submit(&mut self, sample: FaceSample) -> Result<FaceId> {
        self.observe(sample);

        let Some(facelets) = sample.to_facelets() else {
            warn!(sample = %sample, "capture rejected: unknown color");
            return Err(ScanError::UnknownColorDetected {
                sample: sample.to_string(),
            });
        };
        let face = facelets[CENTER_INDEX];

        if let CaptureState::AwaitingFace(expected) = self.state {
            if face != expected {
                warn!(expected = %expected, got = %face, "capture rejected: wrong face");
                return Err(ScanError::FaceMismatch {
                    expected,
                    got: face,
                });
            }
            self.pending.pop_front();
            self.state = match self.pending.front() {
                Some(&next) => {
                    debug!(next = %next, "guided capture advanced");
                    CaptureState::AwaitingFace(next)
                }
                None => {
                    info!("guided capture complete");
                    CaptureState::Complete
                }
            };
        }

        self.cube.replace_face(face, facelets);
        Ok(face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(colors: &str) -> FaceSample {
        colors.parse().unwrap()
    }

    fn uniform(face: FaceId) -> FaceSample {
        let code = face.center_color().code();
        sample(&code.to_string().repeat(9))
    }

    #[test]
    fn test_free_capture_uses_center() {
        let mut session = CaptureSession::default();
        let face = session.submit(sample("rgbygwrgg")).unwrap();
        assert_eq!(face, FaceId::Front);
        assert_eq!(session.cube().face_string(FaceId::Front), "LFBUFDLFF");
        assert_eq!(session.state(), CaptureState::Idle);
    }

    #[test]
    fn test_unknown_color_rejected() {
        let mut session = CaptureSession::default();
        let before = session.cube().clone();
        let err = session.submit(sample("ggggugggg")).unwrap_err();
        assert!(matches!(err, ScanError::UnknownColorDetected { .. }));
        assert_eq!(session.cube(), &before);
        assert!(session.last_sample().is_some());
    }

    #[test]
    fn test_guided_mismatch_keeps_state() {
        let mut session = CaptureSession::default();
        session.start_guided();
        assert_eq!(session.expected_face(), Some(FaceId::Front));

        let pending_before = session.pending_order();
        let cube_before = session.cube().clone();
        let err = session.submit(sample("yyyyyyyyy")).unwrap_err();
        match err {
            ScanError::FaceMismatch { expected, got } => {
                assert_eq!(expected, FaceId::Front);
                assert_eq!(got, FaceId::Up);
            }
            other => panic!("expected FaceMismatch, got {:?}", other),
        }
        assert_eq!(session.state(), CaptureState::AwaitingFace(FaceId::Front));
        assert_eq!(session.cube(), &cube_before);
        assert_eq!(session.pending_order(), pending_before);

        session.submit(sample("ggggggggg")).unwrap();
        assert_eq!(session.state(), CaptureState::AwaitingFace(FaceId::Right));
        assert_eq!(session.pending_order(), pending_before[1..].to_vec());
    }

    #[test]
    fn test_guided_sequence_reaches_complete() {
        let mut session = CaptureSession::default();
        session.start_guided();

        let order = session.pending_order();
        assert_eq!(order.len(), 6);
        for face in order {
            assert_eq!(session.prompt(), Some(CapturePrompt { face }));
            assert_eq!(session.submit(uniform(face)).unwrap(), face);
        }
        assert_eq!(session.state(), CaptureState::Complete);
        assert!(session.prompt().is_none());
        assert_eq!(session.cube(), &CubeState::solved());

        // Complete behaves as free capture
        assert_eq!(session.submit(sample("wwwwywwww")).unwrap(), FaceId::Up);
        assert_eq!(session.state(), CaptureState::Complete);
        assert_eq!(session.cube().face_string(FaceId::Up), "DDDDUDDDD");
    }

    #[test]
    fn test_restart_keeps_committed_faces() {
        let mut session = CaptureSession::default();
        session.start_guided();
        session.submit(sample("gggrgggrg")).unwrap();
        assert_eq!(session.expected_face(), Some(FaceId::Right));

        session.start_guided();
        assert_eq!(session.expected_face(), Some(FaceId::Front));
        assert_eq!(session.cube().face_string(FaceId::Front), "FFFLFFFLF");
    }

    #[test]
    fn test_cancel_and_reset() {
        let mut session = CaptureSession::default();
        session.start_guided();
        session.cancel_guided();
        assert_eq!(session.state(), CaptureState::Idle);
        assert!(session.pending_order().is_empty());

        session.submit(sample("bbbbgbbbb")).unwrap();
        session.reset();
        assert_eq!(session.cube(), &CubeState::solved());
        assert!(session.last_sample().is_none());
    }

    #[test]
    fn test_submit_observed() {
        let mut session = CaptureSession::default();
        assert!(matches!(
            session.submit_observed(),
            Err(ScanError::NothingObserved)
        ));

        session.observe(sample("ooooooooo"));
        assert_eq!(
            session.last_sample().unwrap().face,
            Some(FaceId::Right)
        );
        assert_eq!(session.submit_observed().unwrap(), FaceId::Right);
    }

    #[test]
    fn test_custom_order() {
        let order = CaptureOrder::solver_order();
        let mut session = CaptureSession::with_order(CubeState::solved(), order);
        session.start_guided();
        assert_eq!(session.expected_face(), Some(FaceId::Up));
        assert_eq!(
            session.prompt().unwrap().to_string(),
            "Show the Up face (Yellow center)"
        );
    }
}
