//! Windows-style path string manipulation.
//!
//! The counterpart to [`url`](crate::url) for `\`-separated paths. These are
//! string transforms only; no filesystem access.

/// Remove a single backslash from both ends of a path.
pub fn clean(path: &str) -> String {
    clean_head(&clean_tail(path))
}

/// Remove a single leading backslash.
pub fn clean_head(path: &str) -> String {
    path.strip_prefix('\\').unwrap_or(path).to_string()
}

/// Remove a single trailing backslash.
pub fn clean_tail(path: &str) -> String {
    path.strip_suffix('\\').unwrap_or(path).to_string()
}

/// Convert a `/` relative url into a `\` relative path.
pub fn from_url(url: &str) -> String {
    url.replace('/', "\\")
}

/// Cleanly join segments with `\`, dropping blank ones; `/` separators in
/// the segments are converted.
pub fn join(parts: &[&str]) -> String {
    let joined: Vec<String> =
        parts.iter().map(|part| clean(&from_url(part))).filter(|part| !part.trim().is_empty()).collect();
    clean(&joined.join("\\"))
}

/// Strip a drive prefix (everything through the first `:`) and clean the
/// remainder. A stripped remainder shorter than three characters is treated
/// as no path at all.
pub fn to_relative(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    let stripped = match path.find(':') {
        Some(index) => &path[index + 1..],
        None => path,
    };
    if stripped.len() < 3 {
        return String::new();
    }
    clean(stripped)
}
