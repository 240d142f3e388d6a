//! Corpus ranking: match every candidate, keep the best, cap the list.

use crate::alignment::{self, MatchResult};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::query::SearchQuery;
use quickopen_core::types::Candidate;
use rayon::prelude::*;
use serde::Serialize;

/// A matched candidate and its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedResult {
    pub id: String,
    pub label: String,
    pub score: i32,
}

pub struct Ranker {
    config: SearchConfig,
}

impl Ranker {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Ranks `candidates` against `query`, best score first.
    ///
    /// Equal scores keep their corpus order.
    pub fn rank(&self, query: &SearchQuery, candidates: &[Candidate]) -> Vec<RankedResult> {
        self.rank_until(query, candidates, &|| false)
            .unwrap_or_default()
    }

    /// Like [`Ranker::rank`], but gives up with [`SearchError::Cancelled`] as
    /// soon as `is_cancelled` returns true.
    pub fn rank_until(
        &self,
        query: &SearchQuery,
        candidates: &[Candidate],
        is_cancelled: &(dyn Fn() -> bool + Sync),
    ) -> Result<Vec<RankedResult>, SearchError> {
        let query = query.normalized();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let score_one = |candidate: &Candidate| -> Result<Option<RankedResult>, SearchError> {
            if is_cancelled() {
                return Err(SearchError::Cancelled);
            }
            let score = self.score(&query, candidate, is_cancelled)?;
            Ok(score.map(|score| RankedResult {
                id: candidate.id().to_string(),
                label: candidate.label().to_string(),
                score,
            }))
        };

        let scored: Vec<Option<RankedResult>> =
            if candidates.len() >= self.config.parallel_threshold {
                candidates.par_iter().map(score_one).collect::<Result<_, _>>()?
            } else {
                candidates.iter().map(score_one).collect::<Result<_, _>>()?
            };

        let mut ranked: Vec<RankedResult> = scored.into_iter().flatten().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(self.config.result_limit);
        Ok(ranked)
    }

    /// Scores the label first and falls back to the full id only when the
    /// label does not match.
    fn score(
        &self,
        query: &[char],
        candidate: &Candidate,
        is_cancelled: &(dyn Fn() -> bool + Sync),
    ) -> Result<Option<i32>, SearchError> {
        let label = self.match_text(query, candidate.label(), is_cancelled)?;
        if label.matched {
            return Ok(Some(label.score));
        }

        let id = self.match_text(query, candidate.id(), is_cancelled)?;
        Ok(id.score())
    }

    fn match_text(
        &self,
        query: &[char],
        text: &str,
        is_cancelled: &(dyn Fn() -> bool + Sync),
    ) -> Result<MatchResult, SearchError> {
        alignment::align(query, text, &self.config.scoring, is_cancelled)
    }
}

/// Ranks `candidates` against `query` with the default configuration.
pub fn rank(query: &str, candidates: &[Candidate]) -> Vec<RankedResult> {
    Ranker::new(SearchConfig::default()).rank(&SearchQuery::from(query), candidates)
}
