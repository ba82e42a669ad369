//! Hashing System - MD5 for names, SHA-256 for outputs
//!
//! The name digest picks the colors; the output fingerprint lets callers
//! confirm two renders are byte-identical.

use md5::Md5;
use sha2::{Digest as _, Sha256};

/// 128-bit digest of a name.
pub type Digest = [u8; 16];

/// Compute the MD5 digest of the raw name bytes.
///
/// Total over all inputs: no trimming, no case folding, empty is fine.
pub fn digest(name: impl AsRef<[u8]>) -> Digest {
    let mut hasher = Md5::new();
    hasher.update(name.as_ref());
    let mut out = [0u8; 16];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Lowercase hex form of the name digest (32 chars)
pub fn digest_hex(name: impl AsRef<[u8]>) -> String {
    hex::encode(digest(name))
}

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
