use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A newer query superseded the one being evaluated.
    #[error("search cancelled")]
    Cancelled,
}
