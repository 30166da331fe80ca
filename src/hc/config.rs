//! Hill climbing configuration.

/// Configuration parameters for hill climbing.
///
/// The default configuration places no bound on the number of sweeps:
/// the search runs until a full sweep leaves the best solution unchanged.
///
/// # Examples
///
/// ```
/// use u_hillclimb::hc::HcConfig;
///
/// let config = HcConfig::default().with_max_sweeps(1000);
/// assert_eq!(config.max_sweeps, 1000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Maximum number of sweeps (full neighborhood scans). 0 = no limit.
    ///
    /// With a limit, a run that exhausts it stops with
    /// [`HcResult::converged`](super::HcResult::converged) set to `false`.
    pub max_sweeps: usize,
}

impl HcConfig {
    /// Sets the maximum number of sweeps.
    pub fn with_max_sweeps(mut self, n: usize) -> Self {
        self.max_sweeps = n;
        self
    }

    /// Returns `true` when `sweeps` has reached the configured budget.
    pub(crate) fn is_exhausted(&self, sweeps: usize) -> bool {
        self.max_sweeps > 0 && sweeps >= self.max_sweeps
    }
}
