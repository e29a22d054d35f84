use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use url::Url;

/// Runtime configuration, read once at startup from
/// `config/default.toml`. `PRICE_FEED_URL` overrides the feed URL so a
/// deployment can point at another host without editing the file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub feed: FeedConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub url: String,
    pub symbol: String,
    pub company: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub refresh_rate_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl FeedConfig {
    /// Validated feed endpoint; only ws and wss URLs are accepted.
    pub fn endpoint(&self) -> Result<Url> {
        let url = Url::parse(&self.url)
            .with_context(|| format!("invalid feed url '{}'", self.url))?;
        match url.scheme() {
            "ws" | "wss" => Ok(url),
            other => bail!(
                "invalid feed url '{}': scheme '{}' is not ws or wss",
                self.url,
                other
            ),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Path::new("config/default.toml");
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;

        let mut config: Config =
            toml::from_str(&config_str).context("failed to parse config/default.toml")?;

        if let Ok(url) = std::env::var("PRICE_FEED_URL") {
            config.feed.url = url;
        }

        config.feed.endpoint()?;

        Ok(config)
    }
}
