use serde::{Deserialize, Serialize};

/// Launcher option names. The first keeps the misspelling older installs were shipped with.
const API_KEY_VARS: [&str; 2] = [
    "POPCLIP_OPTION_ARITABLE_API_KEY",
    "POPCLIP_OPTION_AIRTABLE_API_KEY",
];
const TABLE_URL_VAR: &str = "POPCLIP_OPTION_AIRTABLE_DB_URL";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AirtableConfig {
    /// Personal access token, sent as a bearer token
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Full table endpoint, e.g. https://api.airtable.com/v0/<base>/<table>
    pub table_url: String,
}

impl AirtableConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|&var| lookup(var))
            .unwrap_or_default();

        Self {
            api_key,
            table_url: lookup(TABLE_URL_VAR).unwrap_or_default(),
        }
    }
}
