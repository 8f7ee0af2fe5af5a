//! folio: content pipeline for a personal blog
//!
//! Loads a collection of Markdown posts, validates their front-matter,
//! estimates reading time and publishes the collection as an RSS feed.

pub mod commands;
pub mod config;
pub mod content;
pub mod feed;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::{ContentError, Post, PostData, SchemaError};
pub use feed::{FeedBuilder, FeedDocument, FeedItem, FeedSerializer, RssSerializer};
pub use helpers::{estimate, ReadingTime};

/// The blog site
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post collection
    pub collection_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Blog {
    /// Open a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let collection_dir = base_dir.join(&config.source_dir).join(&config.collection);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            collection_dir,
            public_dir,
        }
    }

    /// Load and validate every post
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts = content::ContentLoader::new(self).load_posts()?;
        Ok(posts)
    }

    /// Build the feed document for the current collection
    pub fn feed(&self, site: Option<&str>) -> Result<FeedDocument> {
        let posts = self.load_posts()?;
        let site = site
            .map(str::to_string)
            .unwrap_or_else(|| self.config.site_url());
        Ok(FeedBuilder::from_config(&self.config).build(&posts, &site))
    }

    /// Render the RSS feed for the current collection
    pub fn render_feed(&self, site: Option<&str>) -> Result<String> {
        let xml = self.feed(site)?.render(&RssSerializer::default())?;
        Ok(xml)
    }

    /// Where the feed is written
    pub fn feed_path(&self) -> PathBuf {
        self.public_dir
            .join(self.config.feed.path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.collection_dir, dir.path().join("src/content").join("blog"));
        assert_eq!(blog.public_dir, dir.path().join("dist"));
        assert_eq!(blog.feed_path(), dir.path().join("dist").join("rss.xml"));
    }

    #[test]
    fn test_reads_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "title: Notes\nsource_dir: content\ncollection: posts\nfeed:\n  path: /feed.xml\n",
        )
        .unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "Notes");
        assert_eq!(blog.collection_dir, dir.path().join("content").join("posts"));
        assert_eq!(blog.feed_path(), dir.path().join("dist").join("feed.xml"));
    }

    #[test]
    fn test_feed_uses_configured_site() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        let doc = blog.feed(None).unwrap();
        assert_eq!(doc.site, "https://blog.axelpadilla.me/");
        assert!(doc.items.is_empty());

        let doc = blog.feed(Some("http://localhost:4321/")).unwrap();
        assert_eq!(doc.site, "http://localhost:4321/");
    }
}
