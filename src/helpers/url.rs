//! URL helper functions

/// Whether `link` carries its own scheme (`https://…`, `mailto:…`) or is
/// protocol-relative
pub fn is_absolute_url(link: &str) -> bool {
    if link.starts_with("//") {
        return true;
    }
    match link.find(':') {
        Some(pos) if pos > 0 => {
            let scheme = &link[..pos];
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Scheme and authority of a URL, without a trailing slash
///
/// # Examples
/// ```ignore
/// origin("https://example.com/blog/") // -> "https://example.com"
/// ```
pub fn origin(url: &str) -> &str {
    let Some(scheme_end) = url.find("://") else {
        return url.trim_end_matches('/');
    };
    let authority_start = scheme_end + 3;
    match url[authority_start..].find(['/', '?', '#']) {
        Some(pos) => &url[..authority_start + pos],
        None => url,
    }
}

/// Resolve `link` against `site` the way a browser resolves an href.
///
/// Absolute links are returned untouched, root-relative links keep the
/// site's origin, and anything else is appended to the site's path.
///
/// # Examples
/// ```ignore
/// absolute_url("https://example.com/blog/", "/hello/") // -> "https://example.com/hello/"
/// absolute_url("https://example.com/blog/", "hello/")  // -> "https://example.com/blog/hello/"
/// ```
pub fn absolute_url(site: &str, link: &str) -> String {
    if is_absolute_url(link) {
        return link.to_string();
    }

    if link.starts_with('/') {
        return format!("{}{}", origin(site), link);
    }

    // Relative paths resolve against the site's directory
    let base = match site.rfind('/') {
        Some(pos) if pos + 1 > origin(site).len() => &site[..=pos],
        _ => return format!("{}/{}", origin(site), link),
    };
    format!("{}{}", base, link)
}
