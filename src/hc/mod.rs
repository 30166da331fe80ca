//! Hill Climbing (HC).
//!
//! A single-solution local search that repeatedly scans the whole
//! neighborhood of the best known solution and moves to every neighbor
//! that strictly improves on the running best. The search stops at the
//! first sweep that leaves the best solution unchanged, i.e. at a local
//! optimum with respect to the supplied neighborhood.
//!
//! Two entry points are provided:
//!
//! - [`hill_climbing`] / [`try_hill_climbing`]: the neighborhood, the
//!   evaluator and the equality predicate are plain closures.
//! - [`HcRunner`]: the problem implements [`HcProblem`]; the run is
//!   configured by [`HcConfig`] and reports an [`HcResult`] with the
//!   score trajectory and run statistics.
//!
//! # References
//!
//! - Russell, S. & Norvig, P. (2010). *Artificial Intelligence: A Modern
//!   Approach*, 3rd ed., Section 4.1.1 "Hill-climbing search".

mod config;
mod runner;
mod types;

pub use config::HcConfig;
pub use runner::{hill_climbing, try_hill_climbing, HcResult, HcRunner};
pub use types::HcProblem;
