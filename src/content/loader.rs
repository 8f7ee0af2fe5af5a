//! Content loader - loads the blog collection from the source directory

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use walkdir::WalkDir;

use super::frontmatter::{self, value_kind};
use super::{schema, ContentError, Post, SchemaError};
use crate::Blog;

/// Loads and validates every post of a collection directory
pub struct ContentLoader {
    collection_dir: PathBuf,
}

impl ContentLoader {
    /// Create a loader for the blog's configured collection
    pub fn new(blog: &Blog) -> Self {
        Self::with_dir(blog.collection_dir.clone())
    }

    /// Create a loader reading from an explicit directory
    pub fn with_dir<P: Into<PathBuf>>(collection_dir: P) -> Self {
        Self {
            collection_dir: collection_dir.into(),
        }
    }

    /// Directory the posts are read from
    pub fn collection_dir(&self) -> &Path {
        &self.collection_dir
    }

    /// Load all posts, ordered by slug.
    ///
    /// Every entry is validated. If any entry is invalid, each failure is
    /// logged and the whole load fails.
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        if !self.collection_dir.exists() {
            tracing::warn!("Collection directory {:?} not found", self.collection_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut failures = Vec::new();

        for entry in WalkDir::new(&self.collection_dir)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_content_file(path) {
                continue;
            }

            match self.load_post(path) {
                Ok(post) => {
                    tracing::debug!("Loaded post {}", post.slug);
                    posts.push(post);
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    failures.push(e);
                }
            }
        }

        let count = failures.len();
        if let Some(first) = failures.into_iter().next() {
            return Err(ContentError::Invalid {
                count,
                first: Box::new(first),
            });
        }

        posts.sort_by(|a, b| a.slug.cmp(&b.slug));
        if let Some(pair) = posts.windows(2).find(|w| w[0].slug == w[1].slug) {
            return Err(ContentError::DuplicateSlug {
                slug: pair[0].slug.clone(),
                first: pair[0].source.clone(),
                second: pair[1].source.clone(),
            });
        }

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post, ContentError> {
        let source = path
            .strip_prefix(&self.collection_dir)
            .unwrap_or(path)
            .to_path_buf();
        let entry_err = |e: ContentError| ContentError::Entry {
            path: source.clone(),
            source: Box::new(e),
        };

        let content = fs::read_to_string(path).map_err(|e| entry_err(e.into()))?;
        let (fm, body) = frontmatter::split(&content).map_err(entry_err)?;

        let schema_err = |e: SchemaError| ContentError::Schema {
            path: source.clone(),
            source: e,
        };

        let data = schema::validate(&fm).map_err(schema_err)?;

        // An explicit `slug` key wins over the filename
        let slug = match fm.get("slug") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.trim().trim_matches('/').to_string(),
            Some(other) => {
                return Err(schema_err(SchemaError::InvalidType {
                    field: "slug",
                    expected: "string",
                    found: value_kind(other),
                }))
            }
        };
        let slug = if slug.is_empty() {
            slug_from_path(&source)
        } else {
            slug
        };
        if slug.is_empty() {
            return Err(schema_err(SchemaError::MissingField("slug")));
        }

        Ok(Post {
            slug,
            data,
            body: body.to_string(),
            source,
        })
    }
}

/// Derive a slug from a path relative to the collection directory.
///
/// Each directory segment and the file stem are slugified and joined with
/// `/`, so `Guides/Hello World.md` becomes `guides/hello-world`.
pub fn slug_from_path(relative: &Path) -> String {
    let stem = relative.with_extension("");
    stem.components()
        .filter_map(|c| c.as_os_str().to_str())
        .map(slug::slugify)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Markdown-family files not hidden behind a leading underscore
fn is_content_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('_') || n.starts_with('.'))
        .unwrap_or(true);

    !hidden
        && path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| matches!(e, "md" | "mdx" | "markdown"))
            .unwrap_or(false)
}
