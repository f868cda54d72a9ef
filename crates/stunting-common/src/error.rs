use thiserror::Error;

pub type Result<T> = std::result::Result<T, StuntingError>;

#[derive(Error, Debug)]
pub enum StuntingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("GeoJSON error: {0}")]
    GeoJson(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StuntingError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn http(status: u16) -> Self {
        Self::Http { status }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn geojson(msg: impl Into<String>) -> Self {
        Self::GeoJson(msg.into())
    }

    /// Whether the failure means the cached credentials can no longer be trusted.
    pub fn invalidates_session(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::Http { status: 401 | 403 })
    }
}
