//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Front-matter skeleton for a new post
const SCAFFOLD: &str = r#"---
title: "{{ title }}"
publishDate: "{{ date }}"
description: "{{ description }}"
showReadTime: true
---
"#;

/// Create `<collection>/<slug>.md` and return its path.
///
/// The description defaults to the title so the scaffold passes `check`.
pub fn create_post(
    blog: &Blog,
    title: &str,
    slug: Option<&str>,
    description: Option<&str>,
) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from {:?}", title);
    }

    fs::create_dir_all(&blog.collection_dir)?;
    let file_path = blog.collection_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = SCAFFOLD
        .replace("{{ title }}", &yaml_quoted(title))
        .replace(
            "{{ description }}",
            &yaml_quoted(description.unwrap_or(title)),
        )
        .replace("{{ date }}", &now.format("%Y-%m-%d").to_string());

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Escape `s` for use inside a double-quoted YAML scalar
fn yaml_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
