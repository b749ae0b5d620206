use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::geolocation::GeolocationConfig;
use self::server::ServerConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod geolocation;
pub mod server;
pub mod translator;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub geolocation: GeolocationConfig,
    pub server: ServerConfig,

    /// Outbound request timeout, shared by every external source.
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3); // 3 seconds default

        Config {
            dictionary: DictionaryConfig::new(),
            translator: TranslatorConfig::new(),
            geolocation: GeolocationConfig::new(),
            server: ServerConfig::new(),

            request_timeout_secs,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
