//! Text manipulation helpers.
//!
//! - `splitter`: quote- and escape-aware field splitting (re-exported at this
//!   level as [`split`] / [`split_with`] together with [`QuoteTypes`]);
//! - `case`: pascal/camel casing of word lists;
//! - `process`: max-length truncation with optional ellipsis.

#[path = "text/case.rs"]
pub mod case;
#[path = "text/process.rs"]
pub mod process;
#[path = "text/splitter.rs"]
pub mod splitter;

pub use splitter::{QuoteTypes, split, split_with};
