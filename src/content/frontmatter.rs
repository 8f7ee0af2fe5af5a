//! Front-matter splitting
//!
//! Separates a content file into its raw front-matter mapping and the body
//! that follows it. Nothing here knows which keys a post needs; that is the
//! job of [`super::schema::validate`].

use serde_yaml::{Mapping, Value};

use super::ContentError;

/// Split `content` into its front-matter mapping and the remaining body.
///
/// Supports YAML front-matter fenced by `---` and JSON front-matter either
/// fenced by `;;;` or written as a leading object. A file without
/// front-matter yields an empty mapping and the whole text as body.
pub fn split(content: &str) -> Result<(Mapping, &str), ContentError> {
    let content = content.trim_start_matches('\u{feff}').trim_start();

    if content.starts_with("---") {
        return split_yaml(content);
    }

    if content.starts_with(";;;") || content.starts_with('{') {
        return split_json(content);
    }

    Ok((Mapping::new(), content))
}

fn split_yaml(content: &str) -> Result<(Mapping, &str), ContentError> {
    let rest = &content[3..];
    let rest = rest.trim_start_matches(['\n', '\r']);

    // `---` directly followed by the closing fence
    if let Some(remaining) = rest.strip_prefix("---") {
        return Ok((Mapping::new(), remaining.trim_start_matches(['\n', '\r'])));
    }

    let Some(end_pos) = rest.find("\n---") else {
        // No closing fence, the dashes are a thematic break
        return Ok((Mapping::new(), content));
    };

    let yaml_content = &rest[..end_pos];
    let remaining = &rest[end_pos + 4..];
    let remaining = remaining.trim_start_matches(['\n', '\r']);

    if yaml_content.trim().is_empty() {
        return Ok((Mapping::new(), remaining));
    }

    if !has_yaml_structure(yaml_content) {
        return Ok((Mapping::new(), content));
    }

    match serde_yaml::from_str::<Value>(yaml_content)
        .map_err(|e| ContentError::FrontMatter(e.to_string()))?
    {
        Value::Mapping(map) => Ok((map, remaining)),
        Value::Null => Ok((Mapping::new(), remaining)),
        other => Err(ContentError::FrontMatter(format!(
            "expected a mapping, found {}",
            value_kind(&other)
        ))),
    }
}

/// Whether a fenced block looks like `key: value` YAML rather than prose
/// sitting between two markdown thematic breaks.
fn has_yaml_structure(block: &str) -> bool {
    block.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = unquote(trimmed[..colon_pos].trim_end());
        let is_valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp");
        if !is_valid_key {
            return false;
        }
        let after_colon = &trimmed[colon_pos + 1..];
        after_colon.is_empty() || after_colon.starts_with(' ')
    })
}

/// Strip one pair of matching `"` or `'` around a key
fn unquote(key: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|q| key.strip_prefix(*q)?.strip_suffix(*q))
        .unwrap_or(key)
}

fn split_json(content: &str) -> Result<(Mapping, &str), ContentError> {
    if let Some(rest) = content.strip_prefix(";;;") {
        let end_pos = rest
            .find(";;;")
            .ok_or_else(|| ContentError::FrontMatter("unterminated ;;; block".to_string()))?;
        let json_content = rest[..end_pos].trim();
        let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

        // `;;;` blocks may omit the surrounding braces
        let json_content = if json_content.starts_with('{') {
            json_content.to_string()
        } else {
            format!("{{{}}}", json_content)
        };
        return Ok((json_to_mapping(&json_content)?, remaining));
    }

    let end_pos = matching_brace(content)
        .ok_or_else(|| ContentError::FrontMatter("unbalanced JSON object".to_string()))?;
    let remaining = content[end_pos..].trim_start_matches(['\n', '\r']);
    Ok((json_to_mapping(&content[..end_pos])?, remaining))
}

/// Byte offset just past the brace closing the object opened at offset 0
fn matching_brace(content: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in content.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }

    None
}

fn json_to_mapping(json: &str) -> Result<Mapping, ContentError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ContentError::FrontMatter(e.to_string()))?;
    match serde_yaml::to_value(value).map_err(|e| ContentError::FrontMatter(e.to_string()))? {
        Value::Mapping(map) => Ok(map),
        other => Err(ContentError::FrontMatter(format!(
            "expected an object, found {}",
            value_kind(&other)
        ))),
    }
}

/// Human-readable name of a YAML value's type
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
