use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://jisho.org/api/v1/search/words";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JishoConfig {
    /// Word search endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl JishoConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: lookup("JISHO_API_URL").unwrap_or_else(default_api_url),
        }
    }
}

impl Default for JishoConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}
