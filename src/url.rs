//! Url segment cleaning, joining, and picking.
//!
//! Everything here is pure string manipulation on `/`-separated relative
//! urls; nothing touches the network or the filesystem. Windows-style
//! backslash paths are accepted where noted and normalized through
//! [`from_path`].

/// A segment position, counted from either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    First,
    Second,
    Third,
    /// The last position.
    Ultima,
    /// The position before the ultima.
    Penultima,
    /// The position before the penultima.
    Antepenultima,
}

/// Remove slashes from both ends of a url.
pub fn clean(url: &str) -> String {
    url.trim_matches('/').to_string()
}

/// Remove slashes from the beginning of a url.
pub fn clean_head(url: &str) -> String {
    url.trim_start_matches('/').to_string()
}

/// Remove slashes from the end of a url.
pub fn clean_tail(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Cleanly join segments with `/`, dropping blank ones.
pub fn join(parts: &[&str]) -> String {
    let joined: Vec<String> =
        parts.iter().map(|part| clean(part)).filter(|part| !part.trim().is_empty()).collect();
    clean(&joined.join("/"))
}

/// Convert a Windows-style path into a relative url.
pub fn from_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    clean(&crate::path::to_relative(path).replace('\\', "/"))
}

/// Split a url into its segments; backslash paths are converted first.
pub fn split(url: &str) -> Vec<String> {
    if url.is_empty() {
        return Vec::new();
    }
    let cleaned = clean(&from_path(url));
    if cleaned.is_empty() {
        return Vec::new();
    }
    cleaned.split('/').map(str::to_string).collect()
}

/// The parent of a url: `/a/b/c/d/` becomes `a/b/c`. A single segment (or
/// nothing) has no parent and yields the empty string.
pub fn get_parent(url: &str) -> String {
    strip(url, 1)
}

/// Drop `count` leading segments: `a/b/c/d` shifted once is `b/c/d`.
pub fn shift(url: &str, count: usize) -> String {
    let parts = split(url);
    if count >= parts.len() {
        return String::new();
    }
    parts[count..].join("/")
}

/// Drop `count` trailing segments: `a/b/c/d` stripped once is `a/b/c`.
pub fn strip(url: &str, count: usize) -> String {
    let parts = split(url);
    if count >= parts.len() {
        return String::new();
    }
    parts[..parts.len() - count].join("/")
}

/// Cut a url at its first `?`.
pub fn remove_ending_question_mark(url: &str) -> String {
    match url.find('?') {
        Some(index) => url[..index].to_string(),
        None => url.to_string(),
    }
}

/// Lowercased, non-empty segments of a url.
pub fn part_array(url: &str) -> Vec<String> {
    if url.is_empty() {
        return Vec::new();
    }
    url.to_lowercase().split('/').filter(|part| !part.is_empty()).map(str::to_string).collect()
}

/// Pick one segment of a url by position.
pub fn part(url: &str, position: Position) -> Option<String> {
    let parts = part_array(url);
    let index = match position {
        Position::First => 0,
        Position::Second => 1,
        Position::Third => 2,
        Position::Ultima => parts.len().checked_sub(1)?,
        Position::Penultima => parts.len().checked_sub(2)?,
        Position::Antepenultima => parts.len().checked_sub(3)?,
    };
    parts.get(index).cloned()
}
