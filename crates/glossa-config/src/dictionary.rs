use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    // Other dictionaries exist ("english" among them), but "american-learner"
    // usually describes words better.
    "https://api.collinsdictionary.com/api/v1/dictionaries/american-learner".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let api_key = env::var("COLLINS_KEY").unwrap_or_default();

        Self {
            api_key,
            base_url: default_base_url(),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}
