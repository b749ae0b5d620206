use std::net::IpAddr;

use glossa_core::LookupService;

use crate::geo::GeoClient;

pub struct AppState {
    pub lookup: LookupService,
    pub geo: Option<GeoClient>,
    pub default_language: String,
}

impl AppState {
    /// Target language for a caller that did not name one: geolocate the
    /// client IP when enabled, otherwise the registry default.
    pub async fn language_for(&self, ip: IpAddr) -> String {
        if let Some(geo) = &self.geo {
            if let Some(code) = geo.language_code(ip).await {
                return code;
            }
        }

        self.default_language.clone()
    }
}
