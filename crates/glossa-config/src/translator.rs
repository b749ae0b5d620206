use std::env;

use serde::{Deserialize, Serialize};

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_base_url() -> String {
    "https://translate.google.com".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let source_lang = env::var("SOURCE_LANG").unwrap_or_else(|_| default_source_lang());

        Self {
            source_lang,
            base_url: default_base_url(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            base_url: default_base_url(),
        }
    }
}
