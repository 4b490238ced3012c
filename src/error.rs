//! Crate-wide error type.
//!
//! Configuration mistakes (an empty delimiter set, a duplicate tag) surface
//! immediately at the offending call. Recoverable input anomalies, like a
//! malformed `key=value` pair inside a marker, are not errors; they are
//! skipped and reported through the `log` facade by the code-tag parser.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The splitter was handed an empty delimiter set.
    #[error("delimiter set must not be empty")]
    EmptyDelimiterSet,

    /// A handler was registered under a tag that is already taken.
    #[error("a handler is already registered for tag `{0}`")]
    DuplicateTag(String),

    /// A key collided under [`DuplicateMode::Error`](crate::DuplicateMode).
    #[error("key `{0}` is already present")]
    DuplicateKey(String),

    /// A merkle leaf was not a valid hex string.
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// A decompressed payload was not valid UTF-8.
    #[error("decompressed payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// An underlying read or write failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
