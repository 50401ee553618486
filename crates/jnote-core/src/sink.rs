use anyhow::Result;

use crate::types::DictionaryEntry;

/// Destination that stores one entry per call
#[async_trait::async_trait]
pub trait RecordSink: Send + Sync {
    /// Insert the entry as a new row and return the destination's raw response body
    async fn insert(&self, entry: &DictionaryEntry) -> Result<serde_json::Value>;
}
