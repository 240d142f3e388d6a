//! Search query types.

/// Query type for search.
///
/// Currently supports fuzzy search only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Fuzzy subsequence search.
    Fuzzy(String),
}

impl SearchQuery {
    /// The text as typed.
    pub fn as_str(&self) -> &str {
        let SearchQuery::Fuzzy(text) = self;
        text
    }

    /// Lower-cased query characters, the form the matcher compares against.
    pub fn normalized(&self) -> Vec<char> {
        self.as_str().to_lowercase().chars().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(text: &str) -> Self {
        SearchQuery::Fuzzy(text.to_string())
    }
}
