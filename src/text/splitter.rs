//! Quote- and escape-aware text splitting.
//!
//! Splits a string on a set of delimiter characters in a single left-to-right
//! scan, with two bits of lookahead state: *in quote* and *escape pending*.
//! Inside a quoted region delimiters are literal; a backslash escapes exactly
//! the next character. Quote and escape characters are consumed, never
//! emitted.

use crate::error::Error;

bitflags::bitflags! {
    /// Which quote characters open and close a literal region.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct QuoteTypes: u8 {
        /// Recognize `'` as a region delimiter.
        const SINGLE = 1 << 0;
        /// Recognize `"` as a region delimiter.
        const DOUBLE = 1 << 1;
        /// Recognize both quote characters.
        const BOTH = Self::SINGLE.bits() | Self::DOUBLE.bits();
    }
}

/// Split `text` on `delimiters`, recognizing both quote characters.
///
/// See [`split_with`] for the full contract.
pub fn split(text: &str, delimiters: &[char]) -> Result<Vec<String>, Error> {
    split_with(text, QuoteTypes::BOTH, delimiters)
}

/// Split `text` on `delimiters` under the given quote policy.
///
/// Rules, applied in order to each character:
///
/// - a quote character (per `quotes`) toggles the quoted state, unless an
///   escape is pending, in which case it is appended literally;
/// - `\` arms the escape for the next character and is itself dropped;
/// - inside a quoted region every other character is appended, delimiters
///   included;
/// - outside, an unescaped delimiter ends the current field; an escaped one
///   is appended;
/// - anything else is appended, disarming a pending escape.
///
/// A trailing delimiter does not produce a trailing empty field; empty
/// fields *between* adjacent delimiters are kept. Empty input yields an
/// empty vector. An empty delimiter set is a configuration error.
pub fn split_with(text: &str, quotes: QuoteTypes, delimiters: &[char]) -> Result<Vec<String>, Error> {
    if delimiters.is_empty() {
        return Err(Error::EmptyDelimiterSet);
    }
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quote = false;
    let mut escape_pending = false;

    for c in text.chars() {
        if is_quote(c, quotes) {
            if escape_pending {
                field.push(c);
                escape_pending = false;
            } else {
                in_quote = !in_quote;
            }
        } else if c == '\\' {
            escape_pending = true;
        } else if in_quote {
            field.push(c);
            escape_pending = false;
        } else if delimiters.contains(&c) {
            if escape_pending {
                field.push(c);
                escape_pending = false;
            } else {
                fields.push(std::mem::take(&mut field));
            }
        } else {
            field.push(c);
            escape_pending = false;
        }
    }
    if !field.is_empty() {
        fields.push(field);
    }

    Ok(fields)
}

fn is_quote(c: char, quotes: QuoteTypes) -> bool {
    (quotes.contains(QuoteTypes::SINGLE) && c == '\'') || (quotes.contains(QuoteTypes::DOUBLE) && c == '"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_split() {
        let fields = split("a,b,c", &[',']).unwrap();
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn multiple_delimiters() {
        let fields = split("a,b;c", &[',', ';']).unwrap();
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn single_quotes_protect_delimiters() {
        let fields = split_with("a,'b,c',d", QuoteTypes::SINGLE, &[',']).unwrap();
        assert_eq!(fields, vec!["a", "b,c", "d"]);
    }

    #[test]
    fn double_quotes_ignored_under_single_policy() {
        let fields = split_with(r#"a,"b,c""#, QuoteTypes::SINGLE, &[',']).unwrap();
        assert_eq!(fields, vec!["a", "\"b", "c\""]);
    }

    #[test]
    fn both_policy_recognizes_either_quote() {
        let fields = split_with(r#"'a,b',"c,d",e"#, QuoteTypes::BOTH, &[',']).unwrap();
        assert_eq!(fields, vec!["a,b", "c,d", "e"]);
    }

    #[test]
    fn escaped_delimiter_is_literal() {
        let fields = split_with(r"a\,b,c", QuoteTypes::empty(), &[',']).unwrap();
        assert_eq!(fields, vec!["a,b", "c"]);
    }

    #[test]
    fn escaped_quote_is_literal() {
        let fields = split_with(r"a\'b,c", QuoteTypes::SINGLE, &[',']).unwrap();
        assert_eq!(fields, vec!["a'b", "c"]);
    }

    #[test]
    fn escape_applies_to_one_character_only() {
        // The escape armed before `x` is spent on `x`; the comma after it
        // still separates.
        let fields = split_with(r"a\x,b", QuoteTypes::empty(), &[',']).unwrap();
        assert_eq!(fields, vec!["ax", "b"]);
    }

    #[test]
    fn trailing_delimiter_yields_no_empty_field() {
        let fields = split("a,b,", &[',']).unwrap();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn interior_empty_fields_are_kept() {
        let fields = split("a,,b", &[',']).unwrap();
        assert_eq!(fields, vec!["a", "", "b"]);
    }

    #[test]
    fn empty_text_yields_no_fields() {
        let fields = split("", &[',']).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn empty_delimiter_set_is_an_error() {
        let err = split("a,b", &[]).unwrap_err();
        assert!(matches!(err, Error::EmptyDelimiterSet));
    }

    #[test]
    fn split_and_rejoin_round_trips_without_quote_or_escape_chars() {
        let text = "alpha,beta,gamma";
        let fields = split(text, &[',']).unwrap();
        assert_eq!(fields.join(","), text);
    }
}
