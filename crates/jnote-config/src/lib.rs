use std::env;

use serde::{Deserialize, Serialize};

use self::airtable::AirtableConfig;
use self::jisho::JishoConfig;

pub mod airtable;
pub mod jisho;

/// Text the launcher passes as the current selection
pub const KEYWORD_VAR: &str = "POPCLIP_FULL_TEXT";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    pub jisho: JishoConfig,
    pub airtable: AirtableConfig,

    /// Word to look up, taken verbatim (no trimming)
    pub keyword: String,
}

impl Config {
    /// Read configuration from the process environment, loading `.env` first if present.
    /// Missing values become empty strings and fail later at request time.
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            jisho: JishoConfig::from_lookup(&lookup),
            airtable: AirtableConfig::from_lookup(&lookup),
            keyword: lookup(KEYWORD_VAR).unwrap_or_default(),
        }
    }
}
