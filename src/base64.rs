//! UTF-8 ⇄ base64 helpers.

use ::base64::Engine as _;
use ::base64::engine::general_purpose::STANDARD;

/// Encode text as standard base64.
pub fn to(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    STANDARD.encode(text.as_bytes())
}

/// Decode standard base64 back to text.
///
/// Input that is not valid base64, or does not decode to UTF-8, yields the
/// empty string rather than an error.
pub fn from(encoded: &str) -> String {
    if encoded.is_empty() {
        return String::new();
    }
    STANDARD.decode(encoded).ok().and_then(|bytes| String::from_utf8(bytes).ok()).unwrap_or_default()
}

/// Concatenate parts and encode the result.
pub fn merge(parts: &[&str]) -> String {
    to(&parts.concat())
}

/// Join parts with a separator and encode the result.
pub fn merge_with(separator: char, parts: &[&str]) -> String {
    if parts.is_empty() {
        return String::new();
    }
    to(&parts.join(&separator.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_value() {
        assert_eq!(to("Hello"), "SGVsbG8=");
        assert_eq!(to(""), "");
    }

    #[test]
    fn round_trip() {
        let text = "some text with spaces; and punctuation!";
        assert_eq!(from(&to(text)), text);
    }

    #[test]
    fn bad_input_decodes_to_empty() {
        assert_eq!(from("!!!not base64!!!"), "");
        assert_eq!(from(""), "");
    }

    #[test]
    fn merge_concatenates_before_encoding() {
        assert_eq!(merge(&["Hel", "lo"]), to("Hello"));
        assert_eq!(merge_with('-', &["a", "b"]), to("a-b"));
        assert_eq!(merge_with('-', &[]), "");
    }
}
