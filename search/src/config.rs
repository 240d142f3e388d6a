use quickopen_core::types::{AppConfig, ScoringConfig};

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub scoring: ScoringConfig,
    /// Maximum number of ranked results kept after sorting.
    pub result_limit: usize,
    /// Corpus size from which candidates are scored in parallel.
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for SearchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            scoring: config.scoring.clone(),
            result_limit: config.search.result_limit,
            parallel_threshold: config.search.parallel_threshold,
        }
    }
}
