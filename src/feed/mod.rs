//! Syndication feed
//!
//! [`FeedBuilder`] projects posts into a [`FeedDocument`]. Turning that
//! document into bytes is left to a [`FeedSerializer`]; [`RssSerializer`]
//! is the RSS 2.0 implementation.

mod rss;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::Post;

pub use rss::RssSerializer;

/// Feed serialization errors
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Feed is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A single feed entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedItem {
    pub title: String,
    pub pub_date: DateTime<Utc>,
    pub description: String,
    /// Site-relative link, `/{slug}/`
    pub link: String,
}

impl From<&Post> for FeedItem {
    fn from(post: &Post) -> Self {
        Self {
            title: post.data.title.clone(),
            pub_date: post.data.publish_date,
            description: post.data.description.clone(),
            link: post.link(),
        }
    }
}

/// Channel metadata plus the items, ready for serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedDocument {
    pub title: String,
    pub description: String,
    /// Base URL of the site
    pub site: String,
    /// Stylesheet the feed links to
    pub stylesheet: Option<String>,
    pub items: Vec<FeedItem>,
}

impl FeedDocument {
    /// Serialize with the given serializer
    pub fn render(&self, serializer: &dyn FeedSerializer) -> Result<String, FeedError> {
        serializer.serialize(self)
    }
}

/// Turns a [`FeedDocument`] into its textual form
pub trait FeedSerializer {
    fn serialize(&self, doc: &FeedDocument) -> Result<String, FeedError>;
}

/// Builds the feed document for a post collection
#[derive(Debug, Clone)]
pub struct FeedBuilder {
    title: String,
    description: String,
    stylesheet: Option<String>,
}

impl FeedBuilder {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            stylesheet: None,
        }
    }

    /// Channel metadata from the site configuration
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            stylesheet: config.feed.stylesheet.clone(),
        }
    }

    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = Some(href.into());
        self
    }

    /// Map every post to a feed item, keeping the order of `posts`.
    ///
    /// Callers wanting chronological order sort beforehand.
    pub fn build(&self, posts: &[Post], site: &str) -> FeedDocument {
        FeedDocument {
            title: self.title.clone(),
            description: self.description.clone(),
            site: site.to_string(),
            stylesheet: self.stylesheet.clone(),
            items: posts.iter().map(FeedItem::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostData;
    use chrono::TimeZone;

    fn post(slug: &str, title: &str, day: u32) -> Post {
        let data = PostData {
            title: title.to_string(),
            publish_date: Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0).unwrap(),
            description: format!("About {}", title),
            author: None,
            image: None,
            show_read_time: true,
        };
        Post::new(slug, data, "body")
    }

    fn builder() -> FeedBuilder {
        FeedBuilder::new("My Blog", "Thoughts").stylesheet("/rss/styles.xsl")
    }

    #[test]
    fn test_empty_collection() {
        let doc = builder().build(&[], "https://example.com/");
        assert!(doc.items.is_empty());
        assert_eq!(doc.title, "My Blog");
        assert_eq!(doc.description, "Thoughts");
        assert_eq!(doc.site, "https://example.com/");
        assert_eq!(doc.stylesheet.as_deref(), Some("/rss/styles.xsl"));
    }

    #[test]
    fn test_item_link_from_slug() {
        let doc = builder().build(&[post("hello-world", "Hello", 1)], "https://example.com/");
        assert_eq!(doc.items.len(), 1);
        let item = &doc.items[0];
        assert_eq!(item.link, "/hello-world/");
        assert_eq!(item.title, "Hello");
        assert_eq!(item.description, "About Hello");
        assert_eq!(
            item.pub_date,
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_order_preserved() {
        let posts = vec![post("b", "B", 1), post("a", "A", 3), post("c", "C", 2)];
        let doc = builder().build(&posts, "https://example.com/");
        let links: Vec<_> = doc.items.iter().map(|i| i.link.as_str()).collect();
        assert_eq!(links, vec!["/b/", "/a/", "/c/"]);
    }

    #[test]
    fn test_from_config() {
        let config = SiteConfig::default();
        let doc = FeedBuilder::from_config(&config).build(&[], &config.site_url());
        assert_eq!(doc.title, config.title);
        assert_eq!(doc.description, config.description);
        assert_eq!(doc.stylesheet.as_deref(), Some("/rss/styles.xsl"));
    }

    struct CountingSerializer;

    impl FeedSerializer for CountingSerializer {
        fn serialize(&self, doc: &FeedDocument) -> Result<String, FeedError> {
            Ok(format!("{}:{}", doc.title, doc.items.len()))
        }
    }

    #[test]
    fn test_render_delegates_to_serializer() {
        let doc = builder().build(&[post("a", "A", 1), post("b", "B", 2)], "https://x.dev/");
        assert_eq!(doc.render(&CountingSerializer).unwrap(), "My Blog:2");
    }
}
