use std::collections::BTreeMap;

use jnote_core::DictionaryEntry;
use serde::Serialize;

/// Body of a table insert request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowPayload {
    pub records: Vec<RowRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowRecord {
    pub fields: RowFields,
}

/// Column values of one row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowFields {
    pub word: String,
    pub spell: String,
    /// `meaning1`, `meaning2`, ... one per sense
    #[serde(flatten)]
    pub meanings: BTreeMap<String, String>,
}

impl RowPayload {
    /// Build a single-row payload from an entry
    pub fn from_entry(entry: &DictionaryEntry) -> Self {
        let meanings = entry
            .senses
            .iter()
            .enumerate()
            .map(|(i, sense)| (format!("meaning{}", i + 1), sense.to_cell()))
            .collect();

        Self {
            records: vec![RowRecord {
                fields: RowFields {
                    word: entry.word.clone(),
                    spell: entry.reading.clone(),
                    meanings,
                },
            }],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
