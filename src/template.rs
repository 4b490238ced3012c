//! Literal-token template engine.
//!
//! A [`Template`] holds a mutable text buffer; interpolation replaces every
//! literal `{key}` occurrence with the key's value, walking the map in its
//! insertion order. Replacement is sequential: an earlier value may introduce
//! text that a later key then also matches. That order-dependence is part of
//! the contract; callers relying on chained substitution control it through
//! map insertion order.

use crate::map::Map;

/// A text buffer supporting `{key}` substitution from a [`Map`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    value: String,
}

impl Template {
    /// Create a template from its initial text.
    pub fn new(value: impl Into<String>) -> Self {
        Template { value: value.into() }
    }

    /// Append raw text to the buffer. No substitution happens at append time.
    pub fn append_text(&mut self, text: &str) {
        self.value.push_str(text);
    }

    /// The current buffer text.
    pub fn text(&self) -> &str {
        &self.value
    }

    /// Substitute every `{key}` with its value, in map order.
    ///
    /// The buffer itself is untouched; the result is computed against a
    /// snapshot of the current text. Placeholders with no corresponding key
    /// stay verbatim. Keys match as exact literal substrings; there is no
    /// nesting and no brace escaping.
    pub fn interpolate(&self, map: &Map) -> String {
        let mut result = self.value.clone();
        for (key, value) in map.iter() {
            result = result.replace(&format!("{{{key}}}"), value);
        }
        result
    }

    /// Substitute from plain `"key=value"` pairs.
    ///
    /// A token without `=` stands for itself (`"Bold"` replaces `{Bold}`
    /// with `Bold`); a pair whose value is empty after trimming is skipped,
    /// leaving the placeholder verbatim, as is a token with more than one
    /// `=`.
    pub fn interpolate_pairs(&self, pairs: &[&str]) -> String {
        let mut result = self.value.clone();
        for pair in pairs {
            let parts: Vec<&str> = pair.split('=').collect();
            let (name, value) = match parts.as_slice() {
                [name] => (*name, *name),
                [name, value] => (*name, *value),
                _ => continue,
            };
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            result = result.replace(&format!("{{{name}}}"), value);
        }
        result
    }

    /// One-shot interpolation of `text` against `map`.
    pub fn interpolate_text(text: &str, map: &Map) -> String {
        if text.is_empty() {
            return String::new();
        }
        Template::new(text).interpolate(map)
    }
}

/// Stock templates for quick access.
pub mod common {
    pub const LINK: &str = r#"<a href="{Link}">{Text}</a>"#;
    pub const IMAGE: &str = r#"<img src="{Source}" alt="{Text}" />"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> Map {
        let mut m = Map::new();
        for (k, v) in pairs {
            m.add(*k, *v);
        }
        m
    }

    #[test]
    fn interpolate_replaces_every_occurrence() {
        let template = Template::new("{Greeting}, {Name}! Again: {Greeting}.");
        let out = template.interpolate(&map(&[("Greeting", "Hello"), ("Name", "World")]));
        assert_eq!(out, "Hello, World! Again: Hello.");
    }

    #[test]
    fn unmatched_placeholders_stay_verbatim() {
        let template = Template::new("{Known} and {Unknown}");
        let out = template.interpolate(&map(&[("Known", "yes")]));
        assert_eq!(out, "yes and {Unknown}");
    }

    #[test]
    fn interpolation_is_idempotent_without_nested_placeholders() {
        let m = map(&[("A", "alpha"), ("B", "beta")]);
        let once = Template::new("{A}-{B}-{A}").interpolate(&m);
        let twice = Template::new(&once).interpolate(&m);
        assert_eq!(once, twice);
    }

    #[test]
    fn substitution_is_sequential_in_map_order() {
        // "{A}" expands to text containing "{B}", which the later key then
        // also replaces. Reversing insertion order would leave "{B}" intact.
        let m = map(&[("A", "see {B}"), ("B", "beta")]);
        let out = Template::new("{A}").interpolate(&m);
        assert_eq!(out, "see beta");
    }

    #[test]
    fn buffer_is_not_mutated_by_interpolation() {
        let mut template = Template::new("{X}");
        template.append_text(" tail");
        let _ = template.interpolate(&map(&[("X", "value")]));
        assert_eq!(template.text(), "{X} tail");
    }

    #[test]
    fn pair_form_skips_empty_values_and_bad_tokens() {
        let template = Template::new("{A} {B} {C} {Bold}");
        let out = template.interpolate_pairs(&["A=1", "B=  ", "C=x=y", "Bold"]);
        assert_eq!(out, "1 {B} {C} Bold");
    }

    #[test]
    fn interpolate_text_of_empty_input_is_empty() {
        assert_eq!(Template::interpolate_text("", &map(&[("A", "1")])), "");
    }

    #[test]
    fn common_link_template_renders() {
        let out = Template::new(common::LINK)
            .interpolate(&map(&[("Link", "https://example.org"), ("Text", "Example")]));
        assert_eq!(out, r#"<a href="https://example.org">Example</a>"#);
    }
}
