//! Write the RSS feed to the public directory

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Render the feed and write it, returning the output path
pub fn run(blog: &Blog, site: Option<&str>) -> Result<PathBuf> {
    let start = std::time::Instant::now();

    let xml = blog.render_feed(site)?;

    let output_path = blog.feed_path();
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, xml)?;

    tracing::info!(
        "Generated {:?} in {:.2}s",
        output_path,
        start.elapsed().as_secs_f64()
    );

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_feed() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        fs::create_dir_all(&blog.collection_dir).unwrap();
        fs::write(
            blog.collection_dir.join("hello-world.md"),
            "---\ntitle: Hello\npublishDate: \"2023-01-15\"\ndescription: First\n---\nBody\n",
        )
        .unwrap();

        let path = run(&blog, Some("https://example.org/")).unwrap();
        assert_eq!(path, blog.public_dir.join("rss.xml"));

        let xml = fs::read_to_string(path).unwrap();
        assert!(xml.contains(r#"<?xml-stylesheet href="/rss/styles.xsl" type="text/xsl"?>"#));
        assert!(xml.contains("<link>https://example.org/hello-world/</link>"));
        assert!(xml.contains("<pubDate>Sun, 15 Jan 2023 00:00:00 +0000</pubDate>"));
    }

    #[test]
    fn test_empty_collection_still_writes_feed() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        let path = run(&blog, None).unwrap();
        let xml = fs::read_to_string(path).unwrap();
        assert!(xml.contains("<title>Axel Padilla’s Blog</title>"));
        assert!(xml.contains("<link>https://blog.axelpadilla.me/</link>"));
        assert!(!xml.contains("<item>"));
    }
}
