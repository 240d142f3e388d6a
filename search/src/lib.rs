//! Quickopen fuzzy search library.
//!
//! Ranks candidate strings (file names and paths) against a short typed query.
//!
//! # Design
//!
//! - `classifier`: separator and camel-case boundary predicates.
//! - `alignment`: exhaustive search over every subsequence embedding of the
//!   query into a candidate, keeping the best score.
//! - `ranker`: label-first, id-fallback matching over a corpus; sorted by
//!   score and capped.
//! - `engine`: background worker where each new query supersedes the
//!   previous one.
//!
//! # Non-blocking API
//!
//! - `set_query()`: Posts a new query and invalidates in-flight work
//! - `tick()`: Collects finished results without blocking
//! - `results()`: Latest results for the current query

pub mod alignment;
pub mod classifier;
mod config;
mod engine;
mod error;
mod query;
mod ranker;
mod results;

pub use alignment::{MatchResult, match_and_score, match_and_score_with};
pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use error::SearchError;
pub use quickopen_core::types::ScoringConfig;
pub use query::SearchQuery;
pub use ranker::{RankedResult, Ranker, rank};
pub use results::SearchResults;
