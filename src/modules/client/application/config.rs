use std::env;
use std::time::Duration;

use crate::config::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_UPLOAD_CHUNK_BYTES: usize = 64 * 1024;
pub const DEFAULT_VALIDITY_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root without a trailing slash.
    pub base_url: String,
    pub request_timeout: Duration,
    pub upload_chunk_bytes: usize,
    /// How long a session validity answer is trusted.
    pub validity_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            upload_chunk_bytes: DEFAULT_UPLOAD_CHUNK_BYTES,
            validity_ttl: DEFAULT_VALIDITY_TTL,
        }
    }

    /// Reads `CMS_BASE_URL` and `CMS_REQUEST_TIMEOUT_SECS`, with defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match env::var("CMS_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        };

        if let Ok(raw) = env::var("CMS_REQUEST_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: "CMS_REQUEST_TIMEOUT_SECS",
                value: raw.clone(),
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_validity_ttl(mut self, ttl: Duration) -> Self {
        self.validity_ttl = ttl;
        self
    }

    pub fn with_upload_chunk_bytes(mut self, bytes: usize) -> Self {
        self.upload_chunk_bytes = bytes.max(1);
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
