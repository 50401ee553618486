use crate::types::DictionaryEntry;

/// Dictionary lookup provider
#[async_trait::async_trait]
pub trait Lexicon: Send + Sync {
    /// Look up a keyword and return its first matching entry
    async fn lookup(&self, keyword: &str) -> Result<DictionaryEntry, LookupError>;

    /// Provider name, for logging
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No dictionary entry for {keyword:?} (status {status})")]
    DictionaryNotFound { keyword: String, status: i64 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode lookup response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    /// True when the service answered but has no entry for the word
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::DictionaryNotFound { .. })
    }
}
