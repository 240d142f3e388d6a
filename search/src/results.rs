//! Search results types.

use crate::query::SearchQuery;
use crate::ranker::RankedResult;

/// Ranked results delivered by the [`SearchEngine`](crate::SearchEngine) for
/// one query.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub(crate) query: SearchQuery,
    pub(crate) generation: u64,
    pub(crate) entries: Vec<RankedResult>,
}

impl SearchResults {
    /// The query these results answer.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Generation of the query; increases with every `set_query`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedResult> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<RankedResult> {
        self.entries
    }
}
