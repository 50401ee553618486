use async_trait::async_trait;
use jnote_core::{DictionaryEntry, Lexicon, LookupError, MAX_SENSES, Sense};
use serde::Deserialize;

use crate::pos::classify_labels;

const STATUS_OK: i64 = 200;

/// Client for the jisho.org word search API
#[derive(Clone)]
pub struct JishoClient {
    client: reqwest::Client,
    api_url: String,
}

impl JishoClient {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }
}

#[async_trait]
impl Lexicon for JishoClient {
    async fn lookup(&self, keyword: &str) -> Result<DictionaryEntry, LookupError> {
        tracing::info!("Searching jisho for {:?}", keyword);

        let body = self
            .client
            .get(&self.api_url)
            .query(&[("keyword", keyword)])
            .send()
            .await?
            .text()
            .await?;

        tracing::debug!("jisho response: {}", body);

        let response: JishoResponse = serde_json::from_str(&body)?;
        parse_response(keyword, response)
    }

    fn name(&self) -> &str {
        "jisho"
    }
}

/// Turn a decoded search response into an entry.
///
/// Only the first candidate is used. Its first japanese form gives the word and
/// reading; kana-only words carry no `word` field, so the reading stands in.
pub fn parse_response(keyword: &str, response: JishoResponse) -> Result<DictionaryEntry, LookupError> {
    let not_found = |status| LookupError::DictionaryNotFound {
        keyword: keyword.to_string(),
        status,
    };

    if response.meta.status != STATUS_OK {
        return Err(not_found(response.meta.status));
    }

    let candidate = response
        .data
        .into_iter()
        .next()
        .ok_or_else(|| not_found(STATUS_OK))?;

    let form = candidate.japanese.into_iter().next().unwrap_or_default();
    let reading = form.reading.unwrap_or_default();
    let word = form.word.unwrap_or_else(|| reading.clone());

    let senses = candidate
        .senses
        .iter()
        .take(MAX_SENSES)
        .map(JishoSense::to_sense);

    Ok(DictionaryEntry::new(word, reading, senses))
}

#[derive(Debug, Deserialize)]
pub struct JishoResponse {
    pub meta: JishoMeta,
    #[serde(default)]
    pub data: Vec<JishoCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct JishoMeta {
    pub status: i64,
}

#[derive(Debug, Deserialize)]
pub struct JishoCandidate {
    #[serde(default)]
    pub japanese: Vec<JishoForm>,
    #[serde(default)]
    pub senses: Vec<JishoSense>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JishoForm {
    pub word: Option<String>,
    pub reading: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JishoSense {
    #[serde(default)]
    pub english_definitions: Vec<String>,
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
}

impl JishoSense {
    fn to_sense(&self) -> Sense {
        Sense::new(
            classify_labels(&self.parts_of_speech),
            self.english_definitions.join(";"),
        )
    }
}
