//! Core trait for hill climbing.

/// Defines a hill climbing problem.
///
/// The user supplies the neighborhood of a solution, a score for each
/// solution and an equality predicate. The runner handles the sweep loop,
/// acceptance and convergence detection.
///
/// # Maximization
///
/// Hill climbing maximizes the score. For minimization, negate the cost.
///
/// # Examples
///
/// ```
/// use u_hillclimb::hc::HcProblem;
///
/// /// Walk an integer towards 7.
/// struct Target;
///
/// impl HcProblem for Target {
///     type Solution = i64;
///
///     fn neighbors(&self, &x: &i64) -> Vec<i64> {
///         vec![x - 1, x + 1]
///     }
///
///     fn evaluate(&self, &x: &i64) -> f64 {
///         -((x - 7) as f64).abs()
///     }
///
///     fn is_same(&self, a: &i64, b: &i64) -> bool {
///         a == b
///     }
/// }
/// ```
pub trait HcProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Generates the full neighborhood of `solution`.
    ///
    /// Called once per sweep with the current best. The returned
    /// sequence is scanned in order and must be finite.
    fn neighbors(&self, solution: &Self::Solution) -> Vec<Self::Solution>;

    /// Computes the score of a solution. Higher is better.
    ///
    /// Must be deterministic for runs to be reproducible.
    fn evaluate(&self, solution: &Self::Solution) -> f64;

    /// Returns `true` if the two solutions are considered identical.
    ///
    /// This is the only convergence test: a sweep that ends with a best
    /// solution `is_same` as the one it started from stops the search.
    fn is_same(&self, a: &Self::Solution, b: &Self::Solution) -> bool;
}
