use anyhow::{Context, Result};
use async_trait::async_trait;
use jnote_core::{DictionaryEntry, RecordSink};

use crate::record::RowPayload;

/// Client for a table's record insert endpoint
#[derive(Clone)]
pub struct AirtableClient {
    table_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl AirtableClient {
    pub fn new(table_url: String, api_key: String) -> Self {
        Self {
            table_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// POST the payload and return the response body as-is.
    /// The HTTP status is not checked; error bodies are returned like any other.
    pub async fn create_records(&self, payload: &RowPayload) -> Result<serde_json::Value> {
        let response = self
            .client
            .post(&self.table_url)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await
            .context("Failed to send request to Airtable")?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Airtable answered with HTTP {}", status);
        }

        response
            .json::<serde_json::Value>()
            .await
            .context("Failed to parse Airtable response")
    }
}

#[async_trait]
impl RecordSink for AirtableClient {
    async fn insert(&self, entry: &DictionaryEntry) -> Result<serde_json::Value> {
        tracing::info!("Adding {} to Airtable", entry.word);
        self.create_records(&RowPayload::from_entry(entry)).await
    }
}
