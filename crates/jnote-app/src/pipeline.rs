use anyhow::{Context, Result};
use jnote_airtable::RowPayload;
use jnote_core::{DictionaryEntry, Lexicon, RecordSink};

async fn lookup(keyword: &str, lexicon: &dyn Lexicon) -> Result<DictionaryEntry> {
    let entry = lexicon
        .lookup(keyword)
        .await
        .with_context(|| format!("{} lookup failed for {:?}", lexicon.name(), keyword))?;

    tracing::info!(
        word = %entry.word,
        reading = %entry.reading,
        senses = entry.senses.len(),
        "Found dictionary entry"
    );

    Ok(entry)
}

/// Look up `keyword` and insert the entry into `sink`.
/// Nothing is sent when the lookup fails.
pub async fn run(
    keyword: &str,
    lexicon: &dyn Lexicon,
    sink: &dyn RecordSink,
) -> Result<serde_json::Value> {
    let entry = lookup(keyword, lexicon).await?;

    sink.insert(&entry)
        .await
        .context("Failed to insert dictionary entry")
}

/// Look up `keyword` and return the row payload without sending it
pub async fn preview(keyword: &str, lexicon: &dyn Lexicon) -> Result<serde_json::Value> {
    let entry = lookup(keyword, lexicon).await?;
    let payload = RowPayload::from_entry(&entry)
        .to_json()
        .context("Failed to serialize row payload")?;

    Ok(payload)
}
