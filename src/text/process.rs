//! General text trimming.

/// Return up to `limit` characters of `text`.
pub fn max(text: &str, limit: usize) -> String {
    if text.chars().count() > limit { text.chars().take(limit).collect() } else { text.to_string() }
}

/// Return up to `limit` characters, ending in an ellipsis when truncated.
///
/// The ellipsis counts toward the limit (three characters are reserved for
/// it). With `html_entity` the text form is `&hellip;` instead of `...`.
pub fn max_ellipsis(text: &str, limit: usize, html_entity: bool) -> String {
    if limit > 3 && text.chars().count() > limit - 3 {
        let head: String = text.chars().take(limit - 3).collect();
        return head + if html_entity { "&hellip;" } else { "..." };
    }
    max(text, limit)
}
