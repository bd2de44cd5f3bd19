//! Brute-force solver configuration.

use crate::permutation::PermutationStrategy;

/// Configuration for [`BruteForceSolver`](super::BruteForceSolver).
///
/// # Examples
///
/// ```
/// use u_tour::permutation::PermutationStrategy;
/// use u_tour::tsp::BruteForceConfig;
///
/// let config = BruteForceConfig::default()
///     .with_strategy(PermutationStrategy::Lexicographic)
///     .with_fix_start(true)
///     .with_max_vertices(10);
/// assert!(config.fix_start);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct BruteForceConfig {
    /// Permutation enumeration order.
    pub strategy: PermutationStrategy,
    /// Pin vertex 0 to the first position and permute only the rest.
    ///
    /// Every cycle has a rotation starting at 0, so the optimum is
    /// unchanged while the search shrinks from `n!` to `(n-1)!`.
    pub fix_start: bool,
    /// Refuse graphs with more vertices than this. `None` = no limit.
    pub max_vertices: Option<usize>,
}

impl BruteForceConfig {
    /// Sets the permutation strategy.
    pub fn with_strategy(mut self, strategy: PermutationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables pinning vertex 0.
    pub fn with_fix_start(mut self, fix_start: bool) -> Self {
        self.fix_start = fix_start;
        self
    }

    /// Sets the vertex-count guard.
    pub fn with_max_vertices(mut self, n: usize) -> Self {
        self.max_vertices = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_vertices == Some(0) {
            return Err("max_vertices must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BruteForceConfig::default();
        assert_eq!(config.strategy, PermutationStrategy::Swap);
        assert!(!config.fix_start);
        assert!(config.max_vertices.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_limit() {
        let config = BruteForceConfig::default().with_max_vertices(0);
        assert!(config.validate().is_err());
    }
}
