use crate::error::{ImageGenError, Result};
use std::env;

/// Default width, in pixels, requested from the upstream service.
pub const WIDTH: u32 = 512;
/// Default height, in pixels, requested from the upstream service.
pub const HEIGHT: u32 = 512;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM_URL: &str = "https://chatgpt-42.p.rapidapi.com/texttoimage";
pub const DEFAULT_UPSTREAM_HOST: &str = "chatgpt-42.p.rapidapi.com";

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub api_key: Option<String>,
    pub url: Option<String>,
    pub host: String,
}

/// Credential and endpoint that passed [`UpstreamConfig::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamEndpoint {
    pub url: String,
    pub api_key: String,
    pub host: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub upstream: UpstreamConfig,
    pub dimensions: ImageDimensions,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            api_key: None,
            url: Some(DEFAULT_UPSTREAM_URL.to_string()),
            host: DEFAULT_UPSTREAM_HOST.to_string(),
        }
    }
}

impl UpstreamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("RAPIDAPI_KEY")
            .or_else(|_| env::var("GPT_API_KEY"))
            .ok();
        let url = env::var("IMAGEGEN_UPSTREAM_URL")
            .ok()
            .or_else(|| Some(DEFAULT_UPSTREAM_URL.to_string()));
        let host = env::var("IMAGEGEN_UPSTREAM_HOST")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_HOST.to_string());

        UpstreamConfig { api_key, url, host }
    }

    pub fn with_credentials(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn without_url(mut self) -> Self {
        self.url = None;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key
            .as_deref()
            .map_or(false, |key| !key.trim().is_empty())
    }

    /// Checks that both the credential and the endpoint are present.
    ///
    /// A whitespace-only credential counts as missing. The returned key is trimmed.
    pub fn resolve(&self) -> Result<UpstreamEndpoint> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty());
        let url = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty());

        match (api_key, url) {
            (Some(api_key), Some(url)) => Ok(UpstreamEndpoint {
                url: url.to_string(),
                api_key: api_key.to_string(),
                host: self.host.clone(),
            }),
            _ => Err(ImageGenError::ConfigError(
                "API key or URL is missing in environment variables".into(),
            )),
        }
    }
}

impl Default for ImageDimensions {
    fn default() -> Self {
        ImageDimensions {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn from_env() -> Self {
        let width = env::var("IMAGE_WIDTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(WIDTH);
        let height = env::var("IMAGE_HEIGHT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(HEIGHT);

        ImageDimensions { width, height }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            upstream: UpstreamConfig::default(),
            dimensions: ImageDimensions::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());

        Config {
            port,
            upstream: UpstreamConfig::from_env(),
            dimensions: ImageDimensions::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_upstream(mut self, upstream: UpstreamConfig) -> Self {
        self.upstream = upstream;
        self
    }

    pub fn with_dimensions(mut self, dimensions: ImageDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_trims_credentials() {
        let upstream = UpstreamConfig::new().with_credentials("  secret \n");
        let endpoint = upstream.resolve().unwrap();

        assert_eq!(endpoint.api_key, "secret");
        assert_eq!(endpoint.url, DEFAULT_UPSTREAM_URL);
        assert_eq!(endpoint.host, DEFAULT_UPSTREAM_HOST);
    }

    #[test]
    fn test_resolve_carries_overrides() {
        let endpoint = UpstreamConfig::new()
            .with_credentials("secret")
            .with_url(" http://localhost:9000/texttoimage ")
            .with_host("images.internal")
            .resolve()
            .unwrap();

        assert_eq!(endpoint.url, "http://localhost:9000/texttoimage");
        assert_eq!(endpoint.host, "images.internal");
    }

    #[test]
    fn test_resolve_missing_credentials() {
        let err = UpstreamConfig::new().resolve().unwrap_err();
        assert!(matches!(err, ImageGenError::ConfigError(_)));

        let blank = UpstreamConfig::new().with_credentials("   ");
        assert!(!blank.has_credentials());
        assert!(blank.resolve().is_err());
    }

    #[test]
    fn test_resolve_missing_url() {
        let upstream = UpstreamConfig::new()
            .with_credentials("secret")
            .without_url();
        assert!(matches!(
            upstream.resolve(),
            Err(ImageGenError::ConfigError(_))
        ));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.port(), DEFAULT_PORT);
        assert_eq!(config.dimensions, ImageDimensions::new(WIDTH, HEIGHT));

        let config = config
            .with_port(3000)
            .with_dimensions(ImageDimensions::new(1024, 768));
        assert_eq!(config.port(), 3000);
        assert_eq!(config.dimensions.width, 1024);
        assert_eq!(config.dimensions.height, 768);
    }
}
