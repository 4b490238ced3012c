//! Code-tag marker parsing and expansion.
//!
//! This module is the operational core of the crate: it scans free text for
//! `{{Tag:key=value;key2=value2}}` markers and replaces each one with the
//! rendered template of the handler registered for its tag.
//!
//! ## How the parts work together
//!
//! Expanding one document is a pipeline:
//!
//! ```text
//! content ── marker scan (compiled regex, case-insensitive)
//!                │
//!                ▼  per match, in order found
//!       pair series ── text::split_with (';', single quotes)
//!                │
//!                ▼
//!       fresh Map ── inline pairs, first occurrence wins
//!                │
//!                ▼
//!       handler defaults merged (inline values keep precedence)
//!                │
//!                ▼
//!       Template::interpolate ── rendered replacement
//!                │
//!                ▼
//!       splice: first remaining occurrence of the matched text
//! ```
//!
//! ## Responsibilities by module
//!
//! - `template.rs`: [`CodeTemplate`], the registered (tag, template,
//!   defaults) triple that knows how to render one marker.
//! - `parser.rs`: [`CodeParser`], the tag-keyed registry plus the scan /
//!   merge / render / splice loop.
//!
//! ## Failure posture
//!
//! - Registering the same tag twice is a configuration error, raised at the
//!   `add` call.
//! - A marker whose tag has no handler passes through verbatim.
//! - A pair token without `=` is skipped with a `log::warn!`; the remaining
//!   pairs of that marker and the rest of the document still process.

#[path = "codeparse/parser.rs"]
mod parser;
#[path = "codeparse/template.rs"]
mod template;

#[cfg(test)]
#[path = "codeparse/tests.rs"]
mod tests;

pub use parser::CodeParser;
pub use template::CodeTemplate;
