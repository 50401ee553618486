use serde::{Deserialize, Serialize};

/// Upper bound on senses kept per entry; extra senses are dropped.
pub const MAX_SENSES: usize = 3;

/// A looked-up word, ready to be written out as a table row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub reading: String,
    pub senses: Vec<Sense>,
}

impl DictionaryEntry {
    /// Build an entry, keeping at most `MAX_SENSES` senses in their original order
    pub fn new(word: String, reading: String, senses: impl IntoIterator<Item = Sense>) -> Self {
        Self {
            word,
            reading,
            senses: senses.into_iter().take(MAX_SENSES).collect(),
        }
    }
}

/// One meaning of a word
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sense {
    /// Comma-joined grammatical codes, e.g. "他五" or "イ形,名". May be empty.
    pub tag: String,
    /// Semicolon-joined English glosses
    pub definition: String,
}

impl Sense {
    pub fn new(tag: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            definition: definition.into(),
        }
    }

    /// Cell text in the form `(tag)definition`
    pub fn to_cell(&self) -> String {
        format!("({}){}", self.tag, self.definition)
    }
}
