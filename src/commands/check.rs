//! Validate the post collection

use anyhow::Result;

use crate::content::ContentLoader;
use crate::Blog;

/// Load every post, failing on the first invalid collection.
///
/// Returns the number of valid posts.
pub fn run(blog: &Blog) -> Result<usize> {
    let loader = ContentLoader::new(blog);
    let posts = loader.load_posts()?;
    tracing::info!(
        "{} posts valid in {:?}",
        posts.len(),
        loader.collection_dir()
    );
    Ok(posts.len())
}
