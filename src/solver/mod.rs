//! Boundary to the external cube solver
//!
//! The solving algorithm itself lives outside this crate. The gateway
//! checks structure, calls the collaborator, and turns its untyped
//! rejections into a [`Verdict`].

pub mod gateway;

pub use gateway::{classify_rejection, CubeSolver, SolverGateway, Verdict};
