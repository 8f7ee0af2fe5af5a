//! Content loading errors

use std::path::PathBuf;

use thiserror::Error;

use super::SchemaError;

/// Errors raised while reading the post collection
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Unreadable front-matter: {0}")]
    FrontMatter(String),

    #[error("{}: {source}", .path.display())]
    Entry {
        path: PathBuf,
        #[source]
        source: Box<ContentError>,
    },

    #[error("{}: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    #[error("duplicate slug `{slug}`: {} and {}", .first.display(), .second.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{count} invalid post(s), first: {first}")]
    Invalid {
        count: usize,
        first: Box<ContentError>,
    },
}
