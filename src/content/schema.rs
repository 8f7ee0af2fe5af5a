//! Blog post front-matter schema
//!
//! | key            | type    | required | default |
//! |----------------|---------|----------|---------|
//! | `title`        | string  | yes      |         |
//! | `publishDate`  | string  | yes      |         |
//! | `description`  | string  | yes      |         |
//! | `author`       | string  | no       |         |
//! | `image`        | string  | no       |         |
//! | `showReadTime` | boolean | no       | `true`  |
//!
//! `publishDate` is parsed into a UTC date; keys outside the table are
//! ignored.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use super::frontmatter::value_kind;
use crate::helpers::parse_date;

/// Why a front-matter block was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("malformed date `{0}`")]
    MalformedDate(String),

    #[error("field `{field}` must be a {expected}, found {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Validated front-matter of a blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub title: String,
    pub publish_date: DateTime<Utc>,
    pub description: String,
    pub author: Option<String>,
    pub image: Option<String>,
    pub show_read_time: bool,
}

/// Validate a raw front-matter mapping into [`PostData`].
///
/// Stops at the first offending field, checked in table order.
pub fn validate(front_matter: &Mapping) -> Result<PostData, SchemaError> {
    let title = required_text(front_matter, "title")?;
    let publish_date = publish_date(front_matter)?;
    let description = required_text(front_matter, "description")?;
    let author = optional_text(front_matter, "author")?;
    let image = optional_text(front_matter, "image")?;
    let show_read_time = optional_bool(front_matter, "showReadTime")?.unwrap_or(true);

    Ok(PostData {
        title,
        publish_date,
        description,
        author,
        image,
        show_read_time,
    })
}

/// Present, textual and not blank
fn required_text(fm: &Mapping, field: &'static str) -> Result<String, SchemaError> {
    match fm.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(SchemaError::MissingField(field)),
    }
}

fn publish_date(fm: &Mapping) -> Result<DateTime<Utc>, SchemaError> {
    let field = "publishDate";
    let Some(Value::String(raw)) = fm.get(field) else {
        return Err(SchemaError::MissingField(field));
    };
    parse_date(raw).ok_or_else(|| SchemaError::MalformedDate(raw.clone()))
}

fn optional_text(fm: &Mapping, field: &'static str) -> Result<Option<String>, SchemaError> {
    match fm.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(SchemaError::InvalidType {
            field,
            expected: "string",
            found: value_kind(other),
        }),
    }
}

fn optional_bool(fm: &Mapping, field: &'static str) -> Result<Option<bool>, SchemaError> {
    match fm.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(SchemaError::InvalidType {
            field,
            expected: "boolean",
            found: value_kind(other),
        }),
    }
}
