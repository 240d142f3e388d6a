//! Search engine that ranks on a background worker thread.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::query::SearchQuery;
use crate::ranker::Ranker;
use crate::results::SearchResults;
use quickopen_core::types::Candidate;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Instant;

enum Request {
    Search { generation: u64, query: SearchQuery },
    Candidates(Vec<Candidate>),
    Shutdown,
}

/// Search engine with a single worker thread that owns the candidate corpus.
///
/// Every `set_query` supersedes the previous one: in-flight ranking for an
/// older query stops at its next cancellation check and its results, if any
/// were already sent, are dropped by `tick`. The notify callback is invoked
/// when the worker has new results ready.
pub struct SearchEngine {
    requests: Sender<Request>,
    responses: Receiver<SearchResults>,
    generation: Arc<AtomicU64>,
    query: Option<SearchQuery>,
    latest: Option<SearchResults>,
    worker: Option<JoinHandle<()>>,
}

/// Create operations.
impl SearchEngine {
    /// Creates a new search engine over `candidates`.
    ///
    /// The `notify` callback runs on the worker thread whenever results for
    /// the current query are ready. This is typically used to trigger a UI
    /// repaint.
    pub fn new(
        candidates: Vec<Candidate>,
        config: SearchConfig,
        notify: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<Request>();
        let (response_tx, response_rx) = mpsc::channel::<SearchResults>();
        let generation = Arc::new(AtomicU64::new(0));

        let worker = Worker {
            ranker: Ranker::new(config),
            candidates,
            generation: generation.clone(),
            responses: response_tx,
            notify,
        };
        let handle = thread::spawn(move || worker.run(request_rx));

        Self {
            requests: request_tx,
            responses: response_rx,
            generation,
            query: None,
            latest: None,
            worker: Some(handle),
        }
    }
}

/// Mutation operations.
impl SearchEngine {
    /// Replaces the corpus and re-runs the current query against it.
    pub fn set_candidates(&mut self, candidates: Vec<Candidate>) {
        let _ = self.requests.send(Request::Candidates(candidates));
        if let Some(query) = self.query.clone() {
            self.set_query(query);
        }
    }
}

/// Search operations.
impl SearchEngine {
    /// Sets the search query.
    ///
    /// Returns immediately. Call `tick()` or `wait()` to collect the results.
    pub fn set_query(&mut self, query: SearchQuery) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.query = Some(query.clone());
        let _ = self.requests.send(Request::Search { generation, query });
    }

    /// Collects finished results without blocking.
    ///
    /// Returns true if results for the current query arrived.
    pub fn tick(&mut self) -> bool {
        let mut updated = false;
        while let Ok(results) = self.responses.try_recv() {
            updated |= self.accept(results);
        }
        updated
    }

    /// Blocks until the results for the current query arrive.
    pub fn wait(&mut self) {
        while !self.is_finished() {
            match self.responses.recv() {
                Ok(results) => {
                    self.accept(results);
                }
                Err(_) => break,
            }
        }
    }

    /// Returns true if the latest results answer the current query.
    pub fn is_finished(&self) -> bool {
        match self.query {
            None => true,
            Some(_) => self
                .latest
                .as_ref()
                .is_some_and(|results| results.generation == self.current_generation()),
        }
    }

    /// Returns the most recently delivered results.
    ///
    /// While a newer query is still running these are the results of the
    /// previous one; check `is_finished()` to tell them apart.
    pub fn results(&self) -> Option<&SearchResults> {
        self.latest.as_ref()
    }

    fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn accept(&mut self, results: SearchResults) -> bool {
        if results.generation != self.current_generation() {
            tracing::debug!(generation = results.generation, "discarding stale results");
            return false;
        }
        self.latest = Some(results);
        true
    }
}

impl Drop for SearchEngine {
    fn drop(&mut self) {
        // Cancel whatever is running so the join below is quick.
        self.generation.fetch_add(1, Ordering::SeqCst);
        let _ = self.requests.send(Request::Shutdown);
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

struct Worker {
    ranker: Ranker,
    candidates: Vec<Candidate>,
    generation: Arc<AtomicU64>,
    responses: Sender<SearchResults>,
    notify: Arc<dyn Fn() + Send + Sync>,
}

impl Worker {
    fn run(mut self, requests: Receiver<Request>) {
        while let Ok(first) = requests.recv() {
            // Drain the queue so only the newest query gets evaluated.
            let mut search = None;
            for request in std::iter::once(first).chain(requests.try_iter()) {
                match request {
                    Request::Search { generation, query } => search = Some((generation, query)),
                    Request::Candidates(candidates) => {
                        tracing::debug!(count = candidates.len(), "corpus replaced");
                        self.candidates = candidates;
                    }
                    Request::Shutdown => return,
                }
            }

            if let Some((generation, query)) = search {
                self.search(generation, query);
            }
        }
    }

    fn search(&self, generation: u64, query: SearchQuery) {
        let current = &self.generation;
        let is_cancelled = || current.load(Ordering::Relaxed) != generation;
        if is_cancelled() {
            tracing::debug!(generation, "skipping superseded query");
            return;
        }

        let started = Instant::now();
        match self.ranker.rank_until(&query, &self.candidates, &is_cancelled) {
            Ok(entries) => {
                tracing::debug!(
                    generation,
                    query = query.as_str(),
                    matches = entries.len(),
                    elapsed_us = started.elapsed().as_micros() as u64,
                    "search finished"
                );
                let results = SearchResults {
                    query,
                    generation,
                    entries,
                };
                if self.responses.send(results).is_ok() {
                    (self.notify)();
                }
            }
            Err(SearchError::Cancelled) => {
                tracing::debug!(generation, "search superseded");
            }
        }
    }
}
