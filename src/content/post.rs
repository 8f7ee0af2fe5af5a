//! Post model

use serde::Serialize;
use std::path::PathBuf;

use super::PostData;
use crate::helpers::ReadingTime;

/// A validated entry of the blog collection
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Stable identifier derived from the source filename
    pub slug: String,

    /// Validated front-matter
    #[serde(flatten)]
    pub data: PostData,

    /// Markdown after the front-matter block
    #[serde(skip)]
    pub body: String,

    /// Source path relative to the collection directory
    pub source: PathBuf,
}

impl Post {
    /// Create a post from its parts
    pub fn new(slug: impl Into<String>, data: PostData, body: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            source: PathBuf::from(format!("{}.md", slug)),
            slug,
            data,
            body: body.into(),
        }
    }

    /// Site-relative URL of the post
    pub fn link(&self) -> String {
        format!("/{}/", self.slug)
    }

    /// Reading time of the body, if the post wants it shown
    pub fn reading_time(&self) -> Option<ReadingTime> {
        self.data
            .show_read_time
            .then(|| ReadingTime::of(&self.body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn data(show_read_time: bool) -> PostData {
        PostData {
            title: "Hello".to_string(),
            publish_date: Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap(),
            description: "d".to_string(),
            author: None,
            image: None,
            show_read_time,
        }
    }

    #[test]
    fn test_link() {
        let post = Post::new("hello-world", data(true), "");
        assert_eq!(post.link(), "/hello-world/");
        assert_eq!(post.source, PathBuf::from("hello-world.md"));
    }

    #[test]
    fn test_reading_time_respects_flag() {
        let post = Post::new("a", data(true), "one two three");
        assert_eq!(post.reading_time().map(|rt| rt.words), Some(3));

        let post = Post::new("a", data(false), "one two three");
        assert!(post.reading_time().is_none());
    }
}
