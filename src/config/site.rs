//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,

    // Directory
    pub source_dir: String,
    pub collection: String,
    pub public_dir: String,

    // Feed
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Axel Padilla’s Blog".to_string(),
            description: "Sharing my thoughts on software development, productivity, and life."
                .to_string(),
            author: "Axel Padilla".to_string(),

            url: "https://blog.axelpadilla.me/".to_string(),

            source_dir: "src/content".to_string(),
            collection: "blog".to_string(),
            public_dir: "dist".to_string(),

            feed: FeedConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Site URL used for the feed, falling back to the default when blank
    pub fn site_url(&self) -> String {
        if self.url.trim().is_empty() {
            Self::default().url
        } else {
            self.url.trim().to_string()
        }
    }
}

/// RSS feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Output path of the feed, relative to the public directory
    pub path: String,
    /// Stylesheet referenced from the feed document
    pub stylesheet: Option<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: "rss.xml".to_string(),
            stylesheet: Some("/rss/styles.xsl".to_string()),
        }
    }
}
