//! Exhaustive alignment search.
//!
//! A greedy left-to-right match settles on the first occurrence of each query
//! character and can miss a later occurrence that sits on a word boundary
//! (`"ab"` in `"axxbxxB"`). This module walks every embedding of the query
//! into the candidate with an explicit work-list and keeps the best score of
//! the embeddings that consume the whole query.

use crate::classifier::{is_camel_boundary, is_separator};
use crate::error::SearchError;
use quickopen_core::types::ScoringConfig;

/// Number of work-list pops between two cancellation checks.
const CANCEL_CHECK_INTERVAL: usize = 256;

/// Outcome of matching one query against one candidate string.
///
/// `score` is only meaningful when `matched` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub matched: bool,
    pub score: i32,
}

impl MatchResult {
    pub const NO_MATCH: Self = Self {
        matched: false,
        score: 0,
    };

    fn with_score(score: i32) -> Self {
        Self {
            matched: true,
            score,
        }
    }

    /// Returns the score if the candidate matched.
    pub fn score(&self) -> Option<i32> {
        self.matched.then_some(self.score)
    }
}

/// Matches a lower-case `query` against `candidate` using the default scoring.
pub fn match_and_score(query: &str, candidate: &str) -> MatchResult {
    match_and_score_with(query, candidate, &ScoringConfig::default())
}

/// Matches a lower-case `query` against `candidate`.
///
/// Candidate characters are lower-cased for comparison only; their original
/// case drives camel-case detection.
pub fn match_and_score_with(query: &str, candidate: &str, scoring: &ScoringConfig) -> MatchResult {
    let query: Vec<char> = query.chars().collect();
    align(&query, candidate, scoring, &|| false).unwrap_or(MatchResult::NO_MATCH)
}

/// Cancellable form of [`match_and_score_with`] over pre-split query chars.
pub(crate) fn align(
    query: &[char],
    candidate: &str,
    scoring: &ScoringConfig,
    is_cancelled: &(dyn Fn() -> bool + Sync),
) -> Result<MatchResult, SearchError> {
    let original: Vec<char> = candidate.chars().collect();
    if query.is_empty() || original.is_empty() || query.len() > original.len() {
        return Ok(MatchResult::NO_MATCH);
    }

    let folded: Vec<char> = original.iter().copied().map(fold).collect();
    if !is_subsequence(query, &folded) {
        return Ok(MatchResult::NO_MATCH);
    }

    let best = Alignment::new(query, &original, &folded, scoring).run(is_cancelled)?;
    Ok(best.map_or(MatchResult::NO_MATCH, MatchResult::with_score))
}

fn fold(c: char) -> char {
    if c.is_ascii() {
        c.to_ascii_lowercase()
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

fn is_subsequence(query: &[char], folded: &[char]) -> bool {
    let mut rest = folded.iter();
    query.iter().all(|q| rest.any(|c| c == q))
}

/// One pending branch of the search.
#[derive(Debug, Clone, Copy)]
struct Step {
    query_pos: usize,
    candidate_pos: usize,
    score: i32,
    /// The previous query character was consumed at `candidate_pos - 1`.
    adjacent: bool,
}

struct Alignment<'a> {
    query: &'a [char],
    original: &'a [char],
    folded: &'a [char],
    scoring: &'a ScoringConfig,
    stack: Vec<Step>,
    /// Best score pushed so far per `(query_pos, candidate_pos, adjacent)`.
    ///
    /// Everything a branch can still earn depends only on that triple, so a
    /// branch arriving with a lower or equal score cannot improve the result.
    pushed: Vec<Option<i32>>,
}

impl<'a> Alignment<'a> {
    fn new(
        query: &'a [char],
        original: &'a [char],
        folded: &'a [char],
        scoring: &'a ScoringConfig,
    ) -> Self {
        let states = query.len() * (original.len() + 1) * 2;
        Self {
            query,
            original,
            folded,
            scoring,
            stack: Vec::with_capacity(query.len() * 2),
            pushed: vec![None; states],
        }
    }

    fn run(mut self, is_cancelled: &(dyn Fn() -> bool + Sync)) -> Result<Option<i32>, SearchError> {
        let qlen = self.query.len();
        let unconsumed = (self.original.len() - qlen) as i32 * self.scoring.unmatched_letter;

        self.push(Step {
            query_pos: 0,
            candidate_pos: 0,
            score: 0,
            adjacent: false,
        });

        let mut best: Option<i32> = None;
        let mut popped = 0usize;
        while let Some(step) = self.stack.pop() {
            popped += 1;
            if popped % CANCEL_CHECK_INTERVAL == 0 && is_cancelled() {
                return Err(SearchError::Cancelled);
            }

            let Some(i) = self.find(step.query_pos, step.candidate_pos) else {
                continue;
            };

            // Abandon this occurrence and retry the same query character later.
            self.push(Step {
                candidate_pos: i + 1,
                adjacent: false,
                ..step
            });

            let score = step.score + self.contribution(&step, i);
            if step.query_pos + 1 == qlen {
                let total = score + unconsumed;
                best = Some(best.map_or(total, |b| b.max(total)));
            } else {
                self.push(Step {
                    query_pos: step.query_pos + 1,
                    candidate_pos: i + 1,
                    score,
                    adjacent: true,
                });
            }
        }

        Ok(best)
    }

    /// First position at or after `from` holding `query[query_pos]`.
    fn find(&self, query_pos: usize, from: usize) -> Option<usize> {
        let target = self.query[query_pos];
        self.folded[from..]
            .iter()
            .position(|&c| c == target)
            .map(|offset| from + offset)
    }

    /// Score earned by consuming candidate position `i` from `step`.
    fn contribution(&self, step: &Step, i: usize) -> i32 {
        let scoring = self.scoring;
        let mut score = 0;

        if step.adjacent && i == step.candidate_pos {
            score += scoring.consecutive_match;
        }

        if i > 0 {
            let prev = self.original[i - 1];
            if is_separator(prev) {
                score += scoring.prev_separator;
            }
            if is_camel_boundary(prev, self.original[i]) {
                score += scoring.camel_case;
            }
        }

        if step.query_pos == 0 {
            let leading = i.min(scoring.max_unmatched_leading_letters);
            score += leading as i32 * scoring.unmatched_leading_letter;
        }

        score
    }

    fn push(&mut self, step: Step) {
        let remaining_query = self.query.len() - step.query_pos;
        let remaining_candidate = self.original.len() - step.candidate_pos;
        if remaining_candidate < remaining_query {
            return;
        }

        let index = self.state_index(&step);
        let slot = &mut self.pushed[index];
        if slot.is_some_and(|seen| seen >= step.score) {
            return;
        }
        *slot = Some(step.score);
        self.stack.push(step);
    }

    fn state_index(&self, step: &Step) -> usize {
        let width = self.original.len() + 1;
        (step.query_pos * width + step.candidate_pos) * 2 + usize::from(step.adjacent)
    }
}
