//! Figure configuration.

/// Configuration for rendering a solution and its score trajectory.
///
/// # Examples
///
/// ```
/// use u_hillclimb::plot::PlotConfig;
///
/// let config = PlotConfig::default()
///     .with_size(1600, 900)
///     .with_swap_axes(false);
/// assert_eq!(config.width, 1600);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
    /// Draw points as `(y, x)` instead of `(x, y)`.
    ///
    /// National TSP instances store latitude first, so the default swaps
    /// the axes to put north up.
    pub swap_axes: bool,
    /// Font size of the figure title.
    pub title_size: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            swap_axes: true,
            title_size: 28,
        }
    }
}

impl PlotConfig {
    /// Sets the figure size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_swap_axes(mut self, swap: bool) -> Self {
        self.swap_axes = swap;
        self
    }

    pub fn with_title_size(mut self, size: u32) -> Self {
        self.title_size = size;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.width < 2 || self.height < 2 {
            return Err(format!(
                "figure must be at least 2x2 pixels, got {}x{}",
                self.width, self.height
            ));
        }
        if self.title_size == 0 {
            return Err("title_size must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlotConfig::default();
        assert_eq!((config.width, config.height), (1200, 800));
        assert!(config.swap_axes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_size() {
        assert!(PlotConfig::default().with_size(0, 800).validate().is_err());
        assert!(PlotConfig::default().with_size(800, 1).validate().is_err());
    }

    #[test]
    fn test_validate_bad_title_size() {
        assert!(PlotConfig::default().with_title_size(0).validate().is_err());
    }
}
