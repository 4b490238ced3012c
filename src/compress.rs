//! Gzip compression wrappers.

use crate::error::Error;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

/// Gzip-compress a byte buffer.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Gzip-compress text.
pub fn compress_text(text: &str) -> Result<Vec<u8>, Error> {
    compress(text.as_bytes())
}

/// Decompress a gzip byte buffer.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut decoder = GzDecoder::new(data);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output)?;
    Ok(output)
}

/// Decompress a gzip byte buffer into text.
pub fn decompress_text(data: &[u8]) -> Result<String, Error> {
    Ok(String::from_utf8(decompress(data)?)?)
}
