//! Domain-agnostic hill-climbing local search.
//!
//! Provides:
//!
//! - **Hill Climbing (HC)**: full-neighborhood scan with cumulative
//!   acceptance of strictly improving neighbors, repeated until a sweep
//!   leaves the best solution unchanged. The solution type, neighborhood,
//!   score and equality are all supplied by the caller.
//! - **TSPLIB loader**: reads two-section coordinate files into a list of
//!   labeled 2D points plus header metadata.
//! - **Plotting** (feature `plot`): renders a solution as a closed path
//!   next to its score trajectory.
//!
//! # Architecture
//!
//! The optimizer contains no domain-specific concepts. Route problems,
//! move operators and scoring functions are defined by consumers; the
//! loader and the plotting routine are thin collaborators around it.

pub mod hc;
#[cfg(feature = "plot")]
pub mod plot;
pub mod tsplib;
