use std::net::IpAddr;
use std::time::Duration;

use glossa_config::geolocation::GeolocationConfig;
use serde::Deserialize;

/// IP geolocation client, used only to guess a default target language.
pub struct GeoClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

#[derive(Deserialize)]
struct GeoResponse {
    location: GeoLocation,
}

#[derive(Deserialize)]
struct GeoLocation {
    language: GeoLanguage,
}

#[derive(Deserialize)]
struct GeoLanguage {
    code: String,
}

impl GeoClient {
    pub fn new(config: &GeolocationConfig, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            timeout,
        }
    }

    /// Language code for an IP, or nothing when the service cannot say.
    pub async fn language_code(&self, ip: IpAddr) -> Option<String> {
        match self.fetch(ip).await {
            Ok(code) => Some(code),
            Err(e) => {
                tracing::debug!("geolocation for {ip} failed: {e}");
                None
            }
        }
    }

    async fn fetch(&self, ip: IpAddr) -> Result<String, reqwest::Error> {
        let url = format!("{}/{}?key={}", self.base_url, ip, self.api_key);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let data: GeoResponse = response.json().await?;
        Ok(data.location.language.code)
    }
}
