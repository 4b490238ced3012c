use super::template::CodeTemplate;
use crate::error::Error;
use crate::map::Map;
use crate::template::Template;
use crate::text::splitter::{self, QuoteTypes};
use indexmap::IndexMap;

/// Registry of [`CodeTemplate`] handlers plus the document expansion loop.
///
/// A `CodeParser` is constructed by the caller, populated with [`add`]
/// during a setup phase, and from then on only read by [`parse`]. There is
/// no interior mutability: sharing a parser across threads while another
/// thread is still adding handlers is ruled out by the usual `&`/`&mut`
/// rules, which is exactly the intended discipline.
///
/// [`add`]: CodeParser::add
/// [`parse`]: CodeParser::parse
#[derive(Debug, Clone, Default)]
pub struct CodeParser {
    handlers: IndexMap<String, CodeTemplate>,
}

impl CodeParser {
    /// Create an empty registry.
    pub fn new() -> Self {
        CodeParser::default()
    }

    /// Register a handler under its tag.
    ///
    /// Tags are unique per parser; a second registration of the same tag is
    /// a configuration error and leaves the registry unchanged.
    pub fn add(&mut self, handler: CodeTemplate) -> Result<(), Error> {
        if self.handlers.contains_key(handler.code()) {
            return Err(Error::DuplicateTag(handler.code().to_string()));
        }
        self.handlers.insert(handler.code().to_string(), handler);
        Ok(())
    }

    /// Look up the handler registered for `tag`, if any.
    pub fn handler(&self, tag: &str) -> Option<&CodeTemplate> {
        self.handlers.get(tag)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Expand every recognized marker in `content`.
    ///
    /// Markers are found with a single scan of the original text and
    /// processed in the order found. For each one: the pair series is split
    /// on `;` (single quotes protect embedded separators), pairs are split
    /// on their first `=` and trimmed into a fresh [`Map`] (first occurrence
    /// of a name wins), the handler's defaults are merged underneath, and
    /// the rendered template replaces the first remaining occurrence of the
    /// exact matched `{{...}}` text.
    ///
    /// Markers whose tag has no registered handler are left verbatim. A pair
    /// token without `=` is skipped with a warning; the rest of the marker
    /// still renders.
    pub fn parse(&self, content: &str) -> String {
        let marker = regex!(r"(?i)\{\{(?P<tag>[a-z0-9_-]+):(?P<pairs>[':= |;,a-z0-9_-]+)\}\}");

        let matches: Vec<(String, String, String)> = marker
            .captures_iter(content)
            .map(|caps| (caps[0].to_string(), caps["tag"].to_string(), caps["pairs"].to_string()))
            .collect();

        let mut output = content.to_string();
        for (matched, tag, pairs) in matches {
            let Some(handler) = self.handlers.get(&tag) else {
                continue;
            };

            let mut map = Map::new();
            // The delimiter set is non-empty, so the splitter cannot fail.
            let tokens = splitter::split_with(&pairs, QuoteTypes::SINGLE, &[';']).unwrap_or_default();
            for token in tokens {
                match token.split_once('=') {
                    Some((name, value)) => map.add(name.trim(), value.trim()),
                    None => {
                        log::warn!("ignoring malformed pair `{}` in marker for tag `{}`", token.trim(), tag)
                    }
                }
            }

            handler.merge_defaults_into(&mut map);
            let rendered = Template::new(handler.template()).interpolate(&map);
            output = output.replacen(&matched, &rendered, 1);
        }

        output
    }
}
