use std::sync::Mutex;

use jnote_airtable::RowPayload;
use jnote_core::{DictionaryEntry, Lexicon, LookupError, RecordSink};
use jnote_lang_japanese::{JishoResponse, parse_response};
use serde_json::{Value, json};

use crate::pipeline;

/// Answers every lookup with the same canned jisho body
struct CannedLexicon {
    body: Value,
}

#[async_trait::async_trait]
impl Lexicon for CannedLexicon {
    async fn lookup(&self, keyword: &str) -> Result<DictionaryEntry, LookupError> {
        let response: JishoResponse = serde_json::from_value(self.body.clone())?;
        parse_response(keyword, response)
    }

    fn name(&self) -> &str {
        "canned"
    }
}

/// Records the payload of every insert
#[derive(Default)]
struct RecordingSink {
    payloads: Mutex<Vec<Value>>,
}

impl RecordingSink {
    fn payloads(&self) -> Vec<Value> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RecordSink for RecordingSink {
    async fn insert(&self, entry: &DictionaryEntry) -> anyhow::Result<Value> {
        let payload = RowPayload::from_entry(entry).to_json()?;
        self.payloads.lock().unwrap().push(payload);
        Ok(json!({ "records": [{ "id": "rec123" }] }))
    }
}

struct FailingSink;

#[async_trait::async_trait]
impl RecordSink for FailingSink {
    async fn insert(&self, _entry: &DictionaryEntry) -> anyhow::Result<Value> {
        anyhow::bail!("connection refused")
    }
}

fn hashiru() -> CannedLexicon {
    CannedLexicon {
        body: json!({
            "meta": { "status": 200 },
            "data": [{
                "japanese": [{ "word": "走る", "reading": "はしる" }],
                "senses": [{
                    "english_definitions": ["to run"],
                    "parts_of_speech": ["Godan verb", "Intransitive verb"]
                }]
            }]
        }),
    }
}

#[tokio::test]
async fn test_end_to_end_payload() {
    let sink = RecordingSink::default();

    let response = pipeline::run("走る", &hashiru(), &sink).await.unwrap();

    assert_eq!(response, json!({ "records": [{ "id": "rec123" }] }));
    assert_eq!(
        sink.payloads(),
        vec![json!({ "records": [{ "fields": {
            "word": "走る",
            "spell": "はしる",
            "meaning1": "(自五)to run"
        }}]})]
    );
}

#[tokio::test]
async fn test_not_found_skips_publish() {
    let lexicon = CannedLexicon {
        body: json!({ "meta": { "status": 404 }, "data": [] }),
    };
    let sink = RecordingSink::default();

    let err = pipeline::run("xyz", &lexicon, &sink).await.unwrap_err();

    let lookup_err = err.downcast_ref::<LookupError>().expect("lookup error");
    assert!(lookup_err.is_not_found());
    assert!(sink.payloads().is_empty());
}

#[tokio::test]
async fn test_malformed_lookup_body_skips_publish() {
    let lexicon = CannedLexicon {
        body: json!({ "unexpected": true }),
    };
    let sink = RecordingSink::default();

    let err = pipeline::run("走る", &lexicon, &sink).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LookupError>(),
        Some(LookupError::Decode(_))
    ));
    assert!(sink.payloads().is_empty());
}

#[tokio::test]
async fn test_publish_failure_propagates() {
    let result = pipeline::run("走る", &hashiru(), &FailingSink).await;

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("connection refused"));
}

#[tokio::test]
async fn test_five_senses_publish_three_meanings() {
    let senses: Vec<Value> = ["one", "two", "three", "four", "five"]
        .iter()
        .map(|d| json!({ "english_definitions": [d], "parts_of_speech": ["Noun"] }))
        .collect();
    let lexicon = CannedLexicon {
        body: json!({
            "meta": { "status": 200 },
            "data": [{ "japanese": [{ "word": "数", "reading": "かず" }], "senses": senses }]
        }),
    };
    let sink = RecordingSink::default();

    pipeline::run("数", &lexicon, &sink).await.unwrap();

    let payloads = sink.payloads();
    let fields = &payloads[0]["records"][0]["fields"];
    assert_eq!(fields["meaning1"], "(名)one");
    assert_eq!(fields["meaning3"], "(名)three");
    assert!(fields.get("meaning4").is_none());
}

#[tokio::test]
async fn test_preview_returns_payload() {
    let payload = pipeline::preview("走る", &hashiru()).await.unwrap();

    assert_eq!(payload["records"][0]["fields"]["meaning1"], "(自五)to run");
}
