use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_base_url() -> String {
    "https://api.ipregistry.co".to_string()
}

/// IP geolocation, used only to pick a default target language for callers
/// that do not name one.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeolocationConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl GeolocationConfig {
    pub fn new() -> Self {
        let api_key = env::var("IP_REGISTRY_KEY").unwrap_or_default();

        Self {
            enabled: !api_key.is_empty(),
            api_key,
            base_url: default_base_url(),
        }
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}
