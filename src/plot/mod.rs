//! Solution and trajectory plotting.
//!
//! Renders a two-panel figure: the solution as a closed path through its
//! points (left) and the score trajectory against step index (right).
//! Rendering only reads its inputs.

/// Type alias for the result of a drawing function.
pub type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

mod config;
pub use self::config::PlotConfig;

mod drawing;
pub use self::drawing::{closed_path, draw, plot, plot_with, trajectory_series};
