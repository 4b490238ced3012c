//! Digest wrappers and a merkle-root helper.
//!
//! The primitives come from the RustCrypto crates; this module only picks an
//! algorithm and formats the output as hex.

use crate::error::Error;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// Which digest to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashMethod {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    /// SHA-256 applied twice, bitcoin-style.
    DoubleSha256,
}

/// Hash text, returning uppercase hex.
pub fn hash(text: &str, method: HashMethod) -> String {
    hash_bytes(text.as_bytes(), method)
}

/// Hash a byte buffer, returning uppercase hex.
pub fn hash_bytes(data: &[u8], method: HashMethod) -> String {
    hex::encode(digest(data, method)).to_uppercase()
}

/// Hash a file's contents, returning uppercase hex.
pub fn hash_file(path: impl AsRef<std::path::Path>, method: HashMethod) -> Result<String, Error> {
    let data = std::fs::read(path)?;
    Ok(hash_bytes(&data, method))
}

fn digest(data: &[u8], method: HashMethod) -> Vec<u8> {
    match method {
        HashMethod::Md5 => digest_with::<Md5>(data),
        HashMethod::Sha1 => digest_with::<Sha1>(data),
        HashMethod::Sha256 => digest_with::<Sha256>(data),
        HashMethod::Sha512 => digest_with::<Sha512>(data),
        HashMethod::DoubleSha256 => digest_with::<Sha256>(&digest_with::<Sha256>(data)),
    }
}

fn digest_with<D: Digest>(data: &[u8]) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute a bitcoin-style merkle root over hex-encoded leaves.
///
/// Pairs are combined by reversing each leaf's bytes, concatenating, double
/// SHA-256 hashing, and reversing the output; an odd leaf is paired with
/// itself. The result is lowercase hex. An empty leaf list yields the empty
/// string; a single leaf is its own root.
pub fn merkle_root(leaves: &[&str]) -> Result<String, Error> {
    if leaves.is_empty() {
        return Ok(String::new());
    }

    let mut level: Vec<String> = leaves.iter().map(|leaf| leaf.to_string()).collect();
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len() / 2 + 1);
        let mut index = 0;
        while index + 1 < level.len() {
            next.push(merkle_pair(&level[index], &level[index + 1])?);
            index += 2;
        }
        if level.len() % 2 == 1 {
            // A balanced tree needs an even node count.
            let last = &level[level.len() - 1];
            next.push(merkle_pair(last, last)?);
        }
        level = next;
    }

    Ok(level.remove(0))
}

fn merkle_pair(left: &str, right: &str) -> Result<String, Error> {
    let mut first = hex::decode(left)?;
    first.reverse();
    let mut second = hex::decode(right)?;
    second.reverse();
    first.extend_from_slice(&second);

    let mut output = digest_with::<Sha256>(&digest_with::<Sha256>(&first));
    output.reverse();
    Ok(hex::encode(output))
}
