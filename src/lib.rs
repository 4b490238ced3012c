//! General-purpose text utilities with a code-tag templating core.
//!
//! The crate is built around three cooperating pieces:
//!
//! - [`text::split_with`]: a quote- and escape-aware field splitter;
//! - [`Template`]: literal `{key}` substitution against an ordered [`Map`];
//! - [`CodeParser`]: a registry of per-tag [`CodeTemplate`] handlers that
//!   expands `{{Tag:key=value;...}}` markers embedded in free text.
//!
//! ```
//! use velarium::{CodeParser, CodeTemplate};
//!
//! let mut parser = CodeParser::new();
//! parser.add(CodeTemplate::new("YouTube", "https://www.youtube.com/watch?v={Code}")).unwrap();
//!
//! let out = parser.parse("The talk is {{YouTube:Code=XC2RYiaM6WU}}.");
//! assert_eq!(out, "The talk is https://www.youtube.com/watch?v=XC2RYiaM6WU.");
//! ```
//!
//! Around that core the crate carries the adjacent plumbing a content
//! pipeline keeps needing: type coercion with defaults ([`coerce`]), url and
//! path segment cleaning ([`url`], [`path`]), casing/truncation helpers
//! ([`text`]), base64 and gzip wrappers ([`base64`], [`compress`]), digest
//! helpers ([`hash`]), and a caller-owned provider registry ([`provider`]).
//!
//! Everything is synchronous and in-memory, with no global state. Types
//! follow the usual Rust sharing rules: mutate a [`CodeParser`] registry only
//! while you hold it exclusively, read it freely afterwards.

#[macro_use]
mod macros;

mod error;
mod map;
mod template;

pub mod base64;
pub mod codeparse;
pub mod coerce;
pub mod compress;
pub mod hash;
pub mod path;
pub mod provider;
pub mod text;
pub mod url;

pub use codeparse::{CodeParser, CodeTemplate};
pub use error::Error;
pub use map::{DuplicateMode, Map, MapEntry};
pub use template::Template;
pub use text::QuoteTypes;
pub use url::Position;
