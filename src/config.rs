//! Configuration management for the interaction graph analyzer

use crate::metrics::influence::InfluenceConfig;

/// Default configuration for the interaction graph analyzer
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Damping factor for the influence ranking
    pub damping: f64,

    /// Maximum number of ranking iterations
    pub max_iterations: usize,

    /// L1 delta below which the ranking is considered converged
    pub tolerance: f64,

    /// Number of vertices listed in ranked results
    pub top_k: usize,

    /// Expected density at or above which the dense matrix storage is preferred
    pub dense_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
            top_k: 10,
            dense_threshold: 0.25,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        damping: f64,
        max_iterations: usize,
        tolerance: f64,
        top_k: usize,
        dense_threshold: f64,
    ) -> Self {
        Self {
            damping,
            max_iterations,
            tolerance,
            top_k,
            dense_threshold,
        }
    }

    /// Ranking parameters carried by this configuration
    pub fn influence(&self) -> InfluenceConfig {
        InfluenceConfig {
            damping: self.damping,
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_ranking_defaults() {
        let config = Config::default();
        assert_eq!(config.influence(), InfluenceConfig::default());
        assert_eq!(config.top_k, 10);
    }
}
