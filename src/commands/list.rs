//! List the post collection

use anyhow::Result;
use serde::Serialize;

use crate::content::Post;
use crate::helpers::{short_date, ReadingTime};
use crate::Blog;

/// A post as shown by `list`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry<'a> {
    #[serde(flatten)]
    pub post: &'a Post,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<ReadingTime>,
}

/// Posts newest first, each with its reading time when shown
pub fn entries(posts: &[Post]) -> Vec<ListEntry<'_>> {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| b.data.publish_date.cmp(&a.data.publish_date));

    sorted
        .into_iter()
        .map(|post| ListEntry {
            post,
            link: post.link(),
            reading_time: post.reading_time(),
        })
        .collect()
}

/// Render entries as plain text lines
pub fn format_text(entries: &[ListEntry<'_>]) -> String {
    let mut out = format!("Posts ({}):\n", entries.len());
    for entry in entries {
        let data = &entry.post.data;
        out.push_str(&format!(
            "  {} - {} [{}]",
            short_date(&data.publish_date),
            data.title,
            entry.post.slug
        ));
        if let Some(rt) = entry.reading_time {
            out.push_str(&format!(" ({})", rt));
        }
        out.push('\n');
    }
    out
}

/// List posts, as text or JSON
pub fn run(blog: &Blog, json: bool) -> Result<()> {
    let posts = blog.load_posts()?;
    let entries = entries(&posts);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", format_text(&entries));
    }

    Ok(())
}
