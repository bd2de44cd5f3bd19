//! Hamiltonian detector configuration.

/// Search strategy for [`HamiltonianDetector`](super::HamiltonianDetector).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HamiltonianStrategy {
    /// Exhaustive lexicographic permutation testing.
    Permutation,
    /// Edge-guided DFS with undo-on-backtrack.
    #[default]
    Backtracking,
}

/// Configuration for Hamiltonian cycle detection.
///
/// # Examples
///
/// ```
/// use u_tour::hamiltonian::{HamiltonianConfig, HamiltonianStrategy};
///
/// let config = HamiltonianConfig::default()
///     .with_strategy(HamiltonianStrategy::Permutation)
///     .with_max_vertices(10);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct HamiltonianConfig {
    /// Search strategy.
    pub strategy: HamiltonianStrategy,
    /// Refuse graphs with more vertices than this. `None` = no limit.
    pub max_vertices: Option<usize>,
}

impl HamiltonianConfig {
    /// Sets the search strategy.
    pub fn with_strategy(mut self, strategy: HamiltonianStrategy) -> Self {
        self.strategy = strategy;
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
