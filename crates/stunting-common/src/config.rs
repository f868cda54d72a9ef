use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Static host configuration, read from TOML by the server binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Runtime configuration handed to the browser at `/config.json`
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Listen address for HTTP
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Request timeout
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory holding the compiled front end (index.html + pkg/)
    #[serde(default = "default_site_root")]
    pub root: PathBuf,

    /// Directory served under `/static/` (GeoJSON files, marker icons)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Serve `index.html` for unknown paths so client-side routes resolve
    #[serde(default = "default_spa_fallback")]
    pub spa_fallback: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

/// Front-end runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prefix for every API request; empty means same origin
    #[serde(default)]
    pub api_base_url: String,

    #[serde(default)]
    pub map: MapViewConfig,

    #[serde(default)]
    pub resources: ResourceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewConfig {
    /// Initial view center as `[lat, lng]`
    #[serde(default = "default_map_center")]
    pub center: [f64; 2],

    #[serde(default = "default_map_zoom")]
    pub zoom: u8,

    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,

    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    #[serde(default = "default_tile_attribution")]
    pub tile_attribution: String,

    /// Pin image for point datasets; Leaflet's default marker when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Administrative boundary drawn on every map page
    #[serde(default = "default_boundary_url")]
    pub boundary: String,

    /// Dataset shown by the viewer and the editor
    #[serde(default = "default_viewer_url")]
    pub viewer: String,

    /// Endpoint returning every named collection for the report page
    #[serde(default = "default_collections_url")]
    pub collections: String,

    /// Optional kecamatan/kelurahan polygons shown on the report page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areas: Option<String>,
}

fn default_listen_addr() -> String { "127.0.0.1:8080".to_string() }
fn default_request_timeout() -> Duration { Duration::from_secs(30) }

fn default_site_root() -> PathBuf { PathBuf::from("website") }
fn default_static_dir() -> PathBuf { PathBuf::from("assets") }
fn default_spa_fallback() -> bool { true }

fn default_log_level() -> String { "info".to_string() }

fn default_map_center() -> [f64; 2] { [-6.726168577920489, 108.53918387877482] }
fn default_map_zoom() -> u8 { 14 }
fn default_max_zoom() -> u8 { 19 }
fn default_tile_url() -> String { "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string() }
fn default_tile_attribution() -> String {
    "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>".to_string()
}

fn default_boundary_url() -> String { "/static/cirebon_boundary.geojson".to_string() }
fn default_viewer_url() -> String { "/static/geojson.geojson".to_string() }
fn default_collections_url() -> String { "/api/geojson/get".to_string() }

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_site_root(),
            static_dir: default_static_dir(),
            spa_fallback: default_spa_fallback(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            center: default_map_center(),
            zoom: default_map_zoom(),
            max_zoom: default_max_zoom(),
            tile_url: default_tile_url(),
            tile_attribution: default_tile_attribution(),
            marker_icon: None,
        }
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            boundary: default_boundary_url(),
            viewer: default_viewer_url(),
            collections: default_collections_url(),
            areas: None,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            map: MapViewConfig::default(),
            resources: ResourceConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            site: SiteConfig::default(),
            logging: LoggingConfig::default(),
            client: ClientConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!("Invalid listen address: {}", self.server.listen_addr));
        }

        if self.server.request_timeout.is_zero() {
            return Err("Request timeout must be greater than zero".to_string());
        }

        self.client.validate()
    }
}

impl ClientConfig {
    /// Join an API path onto the configured base URL
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }

    pub fn validate(&self) -> Result<(), String> {
        let [lat, lng] = self.map.center;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(format!("Map center out of range: [{}, {}]", lat, lng));
        }

        if self.map.zoom > self.map.max_zoom {
            return Err(format!(
                "Initial zoom {} exceeds max zoom {}",
                self.map.zoom, self.map.max_zoom
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.server.request_timeout, Duration::from_secs(30));
        assert_eq!(config.client, ClientConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config: ServerConfig = toml::from_str(
            r#"
            [server]
            listen_addr = "0.0.0.0:9000"
            request_timeout = "5s"

            [client.map]
            zoom = 12
            "#,
        )
        .unwrap();

        assert_eq!(config.server.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.server.request_timeout, Duration::from_secs(5));
        assert_eq!(config.client.map.zoom, 12);
        assert_eq!(config.client.map.max_zoom, 19);
        assert_eq!(config.client.resources.collections, "/api/geojson/get");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ServerConfig::default();
        config.server.listen_addr = "not-an-address".to_string();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.client.map.zoom = 20;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.client.map.center = [95.0, 108.5];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_url_join() {
        let mut client = ClientConfig::default();
        assert_eq!(client.api_url("/api/auth/profile"), "/api/auth/profile");

        client.api_base_url = "http://localhost:8080/".to_string();
        assert_eq!(
            client.api_url("/api/auth/profile"),
            "http://localhost:8080/api/auth/profile"
        );
    }
}
