use crate::map::Map;

/// A registered handler: tag name, template text, and optional default pairs.
///
/// The tag and template are fixed at construction; defaults are supplied by
/// the handler author through [`with_default`](CodeTemplate::with_default)
/// before the handler is registered, never by the input text.
///
/// ```
/// use velarium::CodeTemplate;
///
/// let handler = CodeTemplate::new("YouTube", "https://www.youtube.com/watch?v={Code}");
/// assert_eq!(handler.code(), "YouTube");
/// ```
#[derive(Debug, Clone)]
pub struct CodeTemplate {
    code: String,
    template: String,
    defaults: Map,
}

impl CodeTemplate {
    /// Create a handler for `code` rendering `template`.
    pub fn new(code: impl Into<String>, template: impl Into<String>) -> Self {
        CodeTemplate { code: code.into(), template: template.into(), defaults: Map::new() }
    }

    /// Attach a default pair (first write per key wins).
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.add(key, value);
        self
    }

    /// The tag this handler answers to.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The template text rendered for each marker.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The handler-author defaults.
    pub fn defaults(&self) -> &Map {
        &self.defaults
    }

    /// Merge the defaults into `map`.
    ///
    /// `map` already holds the marker's inline pairs, and [`Map::add`] is
    /// first-write-wins, so a key present in both keeps its inline value.
    pub(crate) fn merge_defaults_into(&self, map: &mut Map) {
        map.import(&self.defaults);
    }
}
